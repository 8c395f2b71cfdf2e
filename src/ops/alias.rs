//! Alias management: list, add and remove named dates.

use crate::errors::AppResult;
use crate::journal::Journal;
use crate::store::alias::validate_alias;
use crate::store::AliasStore;
use crate::sync::Syncer;
use tracing::info;

/// Every alias of the journal, after a pull.
pub fn list_aliases(journal: &Journal, sync: &Syncer) -> AppResult<AliasStore> {
    AliasStore::load(journal.root(), sync)
}

/// Adds or replaces alias `name` pointing at `date`.
///
/// Arguments are validated before the alias file is loaded.
///
/// # Errors
///
/// - `AppError::Usage` for an unusable name
/// - `AppError::Date` for a date that is not a real `year/month/day`
/// - `AppError::Parse` if the existing alias file is malformed
pub fn add_alias(journal: &Journal, sync: &Syncer, name: &str, date: &str) -> AppResult<()> {
    let name = name.trim();
    let date = date.trim();
    validate_alias(name, date)?;

    let mut store = AliasStore::load(journal.root(), sync)?;
    store.add(name, date)?;
    store.save(journal.root(), sync)?;
    info!("Added alias {} -> {}", name, date);
    Ok(())
}

/// Removes alias `name`.
///
/// # Errors
///
/// Returns `AppError::AliasNotFound` if no such alias exists; nothing is
/// written or pushed in that case.
pub fn remove_alias(journal: &Journal, sync: &Syncer, name: &str) -> AppResult<()> {
    let name = name.trim();
    let mut store = AliasStore::load(journal.root(), sync)?;
    store.remove(name)?;
    store.save(journal.root(), sync)?;
    info!("Removed alias {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALIAS_FILE;
    use crate::errors::AppError;
    use crate::ops::test_support::journal;
    use std::fs;

    #[test]
    fn test_round_trip() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();

        add_alias(&journal, &sync, " launch ", "2025/03/14").unwrap();
        let store = list_aliases(&journal, &sync).unwrap();
        assert_eq!(store.lookup("launch"), Some("2025/03/14"));
        assert_eq!(
            fs::read_to_string(journal.root().join(ALIAS_FILE)).unwrap(),
            "launch=2025/03/14\n"
        );

        remove_alias(&journal, &sync, "launch").unwrap();
        let store = list_aliases(&journal, &sync).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_add_writes_nothing() {
        let (_dir, journal) = journal();
        let result = add_alias(&journal, &Syncer::default(), "bad", "2025/2/30");
        assert!(matches!(result, Err(AppError::Date(_))));
        assert!(!journal.root().join(ALIAS_FILE).exists());
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let (_dir, journal) = journal();
        let error = remove_alias(&journal, &Syncer::default(), "ghost").unwrap_err();
        assert!(matches!(error, AppError::AliasNotFound(ref name) if name == "ghost"));
    }
}
