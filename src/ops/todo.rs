//! Todo list commands.

use crate::errors::AppResult;
use crate::journal::Journal;
use crate::store::TodoList;
use crate::sync::Syncer;
use tracing::{debug, info};

/// The open todo items, after a pull.
pub fn list_todos(journal: &Journal, sync: &Syncer) -> AppResult<TodoList> {
    TodoList::load(journal.root(), sync)
}

/// Appends `text` to the todo list.
///
/// An item that is already open is left alone: nothing is saved or pushed.
/// Returns whether the item was added.
///
/// # Errors
///
/// Returns `AppError::Usage` for blank text.
pub fn add_todo(journal: &Journal, sync: &Syncer, text: &str) -> AppResult<bool> {
    let mut todos = TodoList::load(journal.root(), sync)?;
    if !todos.add(text)? {
        debug!("Todo already open: {}", text.trim());
        return Ok(false);
    }
    todos.save(journal.root(), sync)?;
    info!("Added todo: {}", text.trim());
    Ok(true)
}

/// Completes (removes) the item at zero-based `index` and returns its text.
///
/// # Errors
///
/// Returns `AppError::Usage` for an index past the end of the list.
pub fn complete_todo(journal: &Journal, sync: &Syncer, index: usize) -> AppResult<String> {
    let mut todos = TodoList::load(journal.root(), sync)?;
    let done = todos.complete(index)?;
    todos.save(journal.root(), sync)?;
    info!("Completed todo: {}", done);
    Ok(done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TODO_FILE;
    use crate::errors::AppError;
    use crate::ops::test_support::journal;
    use std::fs;

    #[test]
    fn test_first_use_is_empty() {
        let (_dir, journal) = journal();
        let todos = list_todos(&journal, &Syncer::default()).unwrap();
        assert!(todos.items().is_empty());
    }

    #[test]
    fn test_add_and_complete() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();

        assert!(add_todo(&journal, &sync, "water plants").unwrap());
        assert!(add_todo(&journal, &sync, "call mom").unwrap());
        assert!(!add_todo(&journal, &sync, "water plants").unwrap());
        assert_eq!(
            fs::read_to_string(journal.root().join(TODO_FILE)).unwrap(),
            "water plants\ncall mom\n"
        );

        assert_eq!(complete_todo(&journal, &sync, 0).unwrap(), "water plants");
        let todos = list_todos(&journal, &sync).unwrap();
        assert_eq!(todos.to_string(), "0: call mom");
    }

    #[test]
    fn test_complete_out_of_range_leaves_file() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();
        add_todo(&journal, &sync, "only").unwrap();

        let error = complete_todo(&journal, &sync, 3).unwrap_err();
        assert!(matches!(error, AppError::Usage(_)));
        assert_eq!(list_todos(&journal, &sync).unwrap().items(), &["only"]);
    }
}
