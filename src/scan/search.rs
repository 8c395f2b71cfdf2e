//! Full-text search across the entries of a journal.
//!
//! Matching itself is delegated to a [`LineSearch`] so tests can swap the
//! external `grep` for an in-process matcher.

use crate::constants::{ENTRY_FILE, GREP_NO_MATCH_STATUS, GREP_PROGRAM};
use crate::errors::{AppError, AppResult};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;
use walkdir::WalkDir;

/// Finds lines in one file that contain a term.
pub trait LineSearch {
    /// Returns matching lines, each formatted as `path:line`.
    ///
    /// A file with no matches yields an empty vector, not an error.
    fn search(&self, term: &str, path: &Path) -> AppResult<Vec<String>>;
}

/// Runs `grep -H <term> <file>` per file.
#[derive(Debug, Clone)]
pub struct GrepSearch {
    program: String,
}

impl Default for GrepSearch {
    fn default() -> Self {
        GrepSearch {
            program: GREP_PROGRAM.to_string(),
        }
    }
}

impl LineSearch for GrepSearch {
    fn search(&self, term: &str, path: &Path) -> AppResult<Vec<String>> {
        let output = Command::new(&self.program)
            .arg("-H")
            .arg("--")
            .arg(term)
            .arg(path)
            .output()?;

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::to_string)
                .collect()),
            Some(GREP_NO_MATCH_STATUS) => Ok(Vec::new()),
            code => Err(AppError::Io(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "{} exited with {:?} on {}: {}",
                    self.program,
                    code,
                    path.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            ))),
        }
    }
}

/// Searches every entry file under `root` for `term`.
///
/// Entries are visited in path order; attachments are not searched.
/// Unreadable directories are skipped.
///
/// # Errors
///
/// - `AppError::Usage` when `term` is empty
/// - Any error of the searcher, which stops the walk
pub fn search_entries(root: &Path, term: &str, searcher: &dyn LineSearch) -> AppResult<Vec<String>> {
    if term.is_empty() {
        return Err(AppError::Usage("must provide a search term".to_string()));
    }

    let mut results = Vec::new();
    for item in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|item| item.file_type().is_file() && item.file_name() == ENTRY_FILE)
    {
        results.extend(searcher.search(term, item.path())?);
    }
    debug!("Search for '{}' matched {} lines", term, results.len());
    Ok(results)
}
