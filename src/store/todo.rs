//! The journal's open todo items.
//!
//! One free-text item per line in the `todo` file at the journal root. An
//! item's identity is its zero-based position, so completing item `n` shifts
//! every later item down by one.

use super::{read_records, write_records};
use crate::constants::TODO_FILE;
use crate::errors::{AppError, AppResult};
use crate::sync::Syncer;
use std::fmt;
use std::path::Path;

/// Ordered list of open todo items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    /// Pulls, then reads the todo file of the journal at `root`.
    ///
    /// A missing file is an empty list.
    pub fn load(root: &Path, sync: &Syncer) -> AppResult<Self> {
        sync.pull_or_warn(root);
        let items = read_records(&root.join(TODO_FILE))?.unwrap_or_default();
        Ok(TodoList { items })
    }

    /// Writes the todo file, then pushes.
    pub fn save(&self, root: &Path, sync: &Syncer) -> AppResult<()> {
        write_records(&root.join(TODO_FILE), &self.items)?;
        sync.push_or_warn(root);
        Ok(())
    }

    /// Appends `text` unless an identical item is already open.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, text: &str) -> AppResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Usage("must provide todo text".to_string()));
        }
        if self.items.iter().any(|item| item == text) {
            return Ok(false);
        }
        self.items.push(text.to_string());
        Ok(true)
    }

    /// Removes and returns the item at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Usage` when `index` is past the end of the list.
    pub fn complete(&mut self, index: usize) -> AppResult<String> {
        if index >= self.items.len() {
            return Err(AppError::Usage(format!("invalid index {}", index)));
        }
        Ok(self.items.remove(index))
    }

    /// Open items in file order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl fmt::Display for TodoList {
    /// Renders `index: text` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}: {}", i, item))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> TodoList {
        TodoList {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_deduplicates() {
        let mut todos = list(&["water plants"]);
        assert!(!todos.add("water plants").unwrap());
        assert!(todos.add("  call mom ").unwrap());
        assert_eq!(todos.items(), &["water plants", "call mom"]);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut todos = TodoList::default();
        assert!(matches!(todos.add("   "), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_complete_shifts_indices() {
        let mut todos = list(&["a", "b", "c"]);
        assert_eq!(todos.complete(1).unwrap(), "b");
        assert_eq!(todos.to_string(), "0: a\n1: c");
        assert!(matches!(todos.complete(2), Err(AppError::Usage(_))));
    }
}
