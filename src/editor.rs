//! Editor abstraction for opening journal entries.
//!
//! Entry editing hands a file to an external program and waits for it to
//! exit. The [`Editor`] trait keeps that hand-off replaceable so operations
//! can be tested without launching a real editor.

use crate::errors::{AppError, AppResult, EditorError};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use daybook::editor::Editor;
/// use daybook::errors::AppResult;
/// use std::path::Path;
///
/// struct DummyEditor;
///
/// impl Editor for DummyEditor {
///     fn edit(&self, path: &Path) -> AppResult<()> {
///         println!("Would open {}", path.display());
///         Ok(())
///     }
/// }
///
/// DummyEditor.edit(Path::new("entry")).unwrap();
/// ```
pub trait Editor {
    /// Opens `path` and blocks until the user is done with it.
    ///
    /// # Errors
    ///
    /// Different implementations may return different errors when the file
    /// cannot be edited.
    fn edit(&self, path: &Path) -> AppResult<()>;
}

/// An [`Editor`] that runs a system command with the file as its only argument.
///
/// # Examples
///
/// ```no_run
/// use daybook::editor::{Editor, SystemEditor};
/// use std::path::Path;
///
/// let editor = SystemEditor::new("vim");
/// editor.edit(Path::new("/tmp/entry")).expect("editor failed");
/// ```
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    /// Wraps an already validated editor command.
    pub fn new(command: impl Into<String>) -> Self {
        SystemEditor {
            command: command.into(),
        }
    }
}

impl Editor for SystemEditor {
    /// # Errors
    ///
    /// Returns `AppError::Editor` when the command is missing, not
    /// executable, cannot be spawned, or exits unsuccessfully.
    fn edit(&self, path: &Path) -> AppResult<()> {
        debug!("Launching editor: {} {:?}", self.command, path);

        let status = Command::new(&self.command)
            .arg(path)
            .status()
            .map_err(|e| AppError::Editor(spawn_error(&self.command, e)))?;

        if !status.success() {
            return Err(AppError::Editor(EditorError::NonZeroExit {
                command: self.command.clone(),
                status_code: status.code().unwrap_or(-1),
            }));
        }
        Ok(())
    }
}

fn spawn_error(command: &str, source: io::Error) -> EditorError {
    let command = command.to_string();
    match source.kind() {
        io::ErrorKind::NotFound => EditorError::CommandNotFound { command, source },
        io::ErrorKind::PermissionDenied => EditorError::PermissionDenied { command, source },
        _ => EditorError::ExecutionFailed { command, source },
    }
}
