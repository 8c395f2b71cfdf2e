//! User-facing journal operations.
//!
//! Each operation resolves its date token, then runs its filesystem work
//! inside the sync discipline: reads pull first, mutations pull before and
//! push after. Operations return data; printing is left to the binary.

pub mod alias;
pub mod calendar;
pub mod entry;
pub mod files;
pub mod todo;

pub use alias::{add_alias, list_aliases, remove_alias};
pub use calendar::{list_entries, show_calendar};
pub use entry::{edit_entry, print_entry};
pub use files::{add_file, copy_file, list_files, remove_file};
pub use todo::{add_todo, complete_todo, list_todos};

use crate::dates::{AliasSource, CalendarDate, DateResolver};
use crate::errors::AppResult;
use crate::journal::Journal;
use crate::store::AliasStore;

/// Resolves a day token for `journal`, consulting its local aliases.
///
/// The alias file is only read when the token is neither an explicit date
/// nor a unique keyword. Nothing is pulled here; the operation the date is
/// handed to does its own pull.
///
/// # Errors
///
/// Propagates validation and not-found errors from
/// [`DateResolver::resolve_day`], and read errors of the alias file.
pub fn resolve_date(
    journal: &Journal,
    resolver: &DateResolver,
    token: &str,
) -> AppResult<CalendarDate> {
    let lookup = |name: &str| -> AppResult<Option<String>> {
        let store = AliasStore::read(journal.root())?;
        Ok(store.lookup(name).map(str::to_string))
    };
    resolver.resolve_day(token, Some(&lookup as &dyn AliasSource))
}


#[cfg(test)]
mod tests {
    use super::test_support::{journal, resolver};
    use super::*;
    use crate::errors::AppError;
    use crate::sync::Syncer;

    #[test]
    fn test_resolve_date_uses_aliases() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();
        add_alias(&journal, &sync, "launch", "2025/3/14").unwrap();

        let date = resolve_date(&journal, &resolver(), "launch").unwrap();
        assert_eq!(date.to_string(), "2025/3/14");

        let date = resolve_date(&journal, &resolver(), "yes").unwrap();
        assert_eq!(date.to_string(), "2025/2/28");
    }

    #[test]
    fn test_resolve_date_without_alias_file() {
        let (_dir, journal) = journal();
        let error = resolve_date(&journal, &resolver(), "launch").unwrap_err();
        assert!(matches!(error, AppError::AliasNotFound(ref name) if name == "launch"));
    }
}
