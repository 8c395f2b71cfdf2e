//! Editing and printing the entry of one day.

use crate::dates::{CalendarDate, DateResolver};
use crate::editor::Editor;
use crate::errors::AppResult;
use crate::journal::Journal;
use crate::sync::Syncer;
use std::path::PathBuf;
use tracing::info;

/// Opens the entry of `date` in `editor`.
///
/// The day directory and an empty entry are created on demand after the pull.
/// The push only happens once the editor exits successfully.
///
/// # Errors
///
/// - `AppError::Io` if the day directory or entry cannot be created
/// - `AppError::Editor` if the editor cannot be launched or fails
///
/// # Examples
///
/// ```
/// use daybook::dates::CalendarDate;
/// use daybook::editor::Editor;
/// use daybook::errors::AppResult;
/// use daybook::journal::Journal;
/// use daybook::ops::edit_entry;
/// use daybook::sync::Syncer;
/// use std::fs;
/// use std::path::Path;
///
/// struct Scribe;
///
/// impl Editor for Scribe {
///     fn edit(&self, path: &Path) -> AppResult<()> {
///         fs::write(path, "hello")?;
///         Ok(())
///     }
/// }
///
/// let dir = tempfile::tempdir().unwrap();
/// let journal = Journal::init(dir.path().join("j")).unwrap();
/// let date = CalendarDate::new(2025, 1, 6).unwrap();
///
/// let path = edit_entry(&journal, &Syncer::default(), &Scribe, date).unwrap();
/// assert!(path.ends_with("2025/1/6/entry"));
/// assert_eq!(fs::read_to_string(path).unwrap(), "hello");
/// ```
pub fn edit_entry(
    journal: &Journal,
    sync: &Syncer,
    editor: &dyn Editor,
    date: CalendarDate,
) -> AppResult<PathBuf> {
    let path = sync.mutate(journal.root(), || {
        let path = journal.prepare_entry(date)?;
        editor.edit(&path)?;
        Ok(path)
    })?;
    info!("Edited entry for {}", date);
    Ok(path)
}

/// Raw contents of the entry for the day token `token`.
///
/// Pulls once, then resolves the token against the freshly pulled aliases.
///
/// # Errors
///
/// - Resolution errors from [`super::resolve_date`]
/// - `AppError::EntryNotFound` if the day has no entry
pub fn print_entry(
    journal: &Journal,
    sync: &Syncer,
    resolver: &DateResolver,
    token: &str,
) -> AppResult<Vec<u8>> {
    sync.pull_or_warn(journal.root());
    let date = super::resolve_date(journal, resolver, token)?;
    journal.read_entry(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, EditorError};
    use crate::ops::test_support::{journal, resolver};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    struct RecordingEditor {
        opened: RefCell<Vec<PathBuf>>,
        append: &'static str,
    }

    impl RecordingEditor {
        fn appending(text: &'static str) -> Self {
            RecordingEditor {
                opened: RefCell::new(Vec::new()),
                append: text,
            }
        }
    }

    impl Editor for RecordingEditor {
        fn edit(&self, path: &Path) -> AppResult<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            let mut content = fs::read_to_string(path)?;
            content.push_str(self.append);
            fs::write(path, content)?;
            Ok(())
        }
    }

    struct FailingEditor;

    impl Editor for FailingEditor {
        fn edit(&self, _path: &Path) -> AppResult<()> {
            Err(AppError::Editor(EditorError::NonZeroExit {
                command: "vim".to_string(),
                status_code: 1,
            }))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_edit_then_print() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();
        let day = date(2025, 1, 6);

        let editor = RecordingEditor::appending("first\n");
        edit_entry(&journal, &sync, &editor, day).unwrap();
        let editor2 = RecordingEditor::appending("second\n");
        edit_entry(&journal, &sync, &editor2, day).unwrap();

        assert_eq!(editor.opened.borrow().len(), 1);
        assert_eq!(
            print_entry(&journal, &sync, &resolver(), "2025/1/6").unwrap(),
            b"first\nsecond\n"
        );
    }

    #[test]
    fn test_editor_failure_is_surfaced() {
        let (_dir, journal) = journal();
        let result = edit_entry(&journal, &Syncer::default(), &FailingEditor, date(2025, 1, 6));
        assert!(matches!(result, Err(AppError::Editor(_))));
    }

    #[test]
    fn test_print_missing_entry() {
        let (_dir, journal) = journal();
        let error =
            print_entry(&journal, &Syncer::default(), &resolver(), "2025/1/7").unwrap_err();
        assert!(matches!(error, AppError::EntryNotFound(ref d) if d == "2025/1/7"));
        assert!(!journal.day_path(date(2025, 1, 7)).exists());
    }

    #[test]
    fn test_print_resolves_aliases() {
        let (_dir, journal) = journal();
        let sync = Syncer::default();
        edit_entry(&journal, &sync, &RecordingEditor::appending("cake\n"), date(2025, 2, 9)).unwrap();
        crate::ops::add_alias(&journal, &sync, "birthday", "2025/2/9").unwrap();

        let text = print_entry(&journal, &sync, &resolver(), "birthday").unwrap();
        assert_eq!(text, b"cake\n");
    }
}
