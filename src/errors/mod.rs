//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Errors fall into four groups:
//! - validation (`Date`, `Match`, `Usage`, `InvalidFilename`, `Parse`)
//! - not-found (`AliasNotFound`, `AttachmentNotFound`, `EntryNotFound`, `NotAJournal`)
//! - sync (`SyncError`), which callers only ever log
//! - storage I/O (`Io`)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning a token into a calendar date or month.
///
/// # Examples
///
/// ```
/// use daybook::errors::DateError;
///
/// let error = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", error), "invalid date: 2025/2/30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// A token that does not have exactly three `/`-separated parts.
    #[error("invalid date format: {0} (expected year/month/day)")]
    Format(String),

    /// A year/month/day component that is not an integer.
    #[error("invalid {component}: {value}")]
    InvalidComponent {
        /// Which component failed ("year", "month" or "day")
        component: &'static str,
        /// The raw text that failed to parse
        value: String,
    },

    /// A month outside 1..=12.
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    /// Components that do not survive calendar normalization unchanged.
    #[error("invalid date: {year}/{month}/{day}")]
    InvalidDate {
        /// Year as given
        year: i32,
        /// Month as given
        month: u32,
        /// Day as given
        day: u32,
    },

    /// Month arithmetic left the representable calendar range.
    #[error("date out of range")]
    OutOfRange,
}

/// Failure of unique-prefix matching against a candidate list.
///
/// # Examples
///
/// ```
/// use daybook::errors::MatchError;
///
/// let error = MatchError::NoMatch {
///     input: "fool".to_string(),
///     options: vec!["foo".to_string(), "bar".to_string()],
/// };
/// assert_eq!(format!("{}", error), "no matching option for 'fool': options are [foo, bar]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No candidate starts with the input.
    #[error("no matching option for '{input}': options are [{}]", .options.join(", "))]
    NoMatch {
        /// The token that was matched
        input: String,
        /// Every candidate that was considered
        options: Vec<String>,
    },

    /// More than one candidate starts with the input.
    #[error("ambiguous option '{input}': matches [{}]", .matches.join(", "))]
    Ambiguous {
        /// The token that was matched
        input: String,
        /// Every candidate the token is a prefix of
        matches: Vec<String>,
    },
}

/// Represents specific error cases that can occur when interacting with external editors.
///
/// # Examples
///
/// ```
/// use daybook::errors::EditorError;
///
/// let error = EditorError::NonZeroExit {
///     command: "vim".to_string(),
///     status_code: 1,
/// };
///
/// assert!(format!("{}", error).contains("non-zero status code"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}.")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}.")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor exits with a non-zero status code.
    #[error("Editor '{command}' exited with non-zero status code: {status_code}.")]
    NonZeroExit {
        /// The editor command that exited with a non-zero status
        command: String,
        /// The exit status code
        status_code: i32,
    },
}

/// Errors from the remote synchronization steps.
///
/// These never abort a journal command: the sync wrapper logs them and the
/// wrapped operation carries on with local state.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The journal config could not be read to decide whether to sync.
    #[error("sync config: {0}")]
    Config(String),

    /// A sync step could not be started at all.
    #[error("sync {step}: failed to run '{program}': {source}")]
    Spawn {
        /// Which step failed ("pull", "add", "diff", "commit", "push")
        step: &'static str,
        /// The program that was launched
        program: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A sync step ran and exited unsuccessfully.
    #[error("sync {step}: exit status {status}: {output}")]
    StepFailed {
        /// Which step failed ("pull", "add", "diff", "commit", "push")
        step: &'static str,
        /// Exit code, or -1 when killed by a signal
        status: i32,
        /// Combined stdout and stderr of the step
        output: String,
    },
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A date or month token that does not resolve to a real date.
    #[error("{0}")]
    Date(#[from] DateError),

    /// A keyword that matched no candidate or several.
    #[error("{0}")]
    Match(#[from] MatchError),

    /// Wrong number or shape of command arguments.
    #[error("{0}")]
    Usage(String),

    /// A malformed record in one of the journal's line-oriented files.
    #[error("invalid {kind} entry in {}: {line}", .path.display())]
    Parse {
        /// What the file holds ("alias", "config")
        kind: &'static str,
        /// File that was being loaded
        path: PathBuf,
        /// The offending line
        line: String,
    },

    /// The journal root has no marker file.
    #[error("invalid journal: {}: {source}", .path.display())]
    NotAJournal {
        /// The directory that was expected to be a journal
        path: PathBuf,
        /// Why the marker could not be found
        #[source]
        source: io::Error,
    },

    /// `init` was pointed at a path that already exists.
    #[error("path {} exists", .0.display())]
    AlreadyExists(PathBuf),

    /// A token that is neither a date nor a keyword, and no alias of that name exists.
    #[error("alias not found: {0}")]
    AliasNotFound(String),

    /// A day directory has no attachment with the requested name.
    #[error("file not found: {0}")]
    AttachmentNotFound(String),

    /// A day has no entry to read.
    #[error("no entry for {0}")]
    EntryNotFound(String),

    /// An attachment name that cannot live inside a day directory.
    #[error("invalid file name: {0}")]
    InvalidFilename(String),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Usage("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        assert_eq!(
            format!("{}", AppError::Io(io_error)),
            "I/O error: permission denied"
        );

        let date_error: AppError = DateError::InvalidMonth(13).into();
        assert_eq!(format!("{}", date_error), "invalid month: 13");

        let alias_error = AppError::AliasNotFound("bday".to_string());
        assert_eq!(format!("{}", alias_error), "alias not found: bday");

        let parse_error = AppError::Parse {
            kind: "alias",
            path: PathBuf::from("/j/aliases"),
            line: "garbage".to_string(),
        };
        assert_eq!(
            format!("{}", parse_error),
            "invalid alias entry in /j/aliases: garbage"
        );
    }

    #[test]
    fn test_match_error_display() {
        let error = MatchError::Ambiguous {
            input: "t".to_string(),
            matches: vec!["today".to_string(), "tomorrow".to_string()],
        };
        assert_eq!(
            format!("{}", error),
            "ambiguous option 't': matches [today, tomorrow]"
        );
    }

    #[test]
    fn test_sync_error_variants() {
        let error = SyncError::StepFailed {
            step: "pull",
            status: 1,
            output: "fatal: no remote".to_string(),
        };
        assert!(format!("{}", error).contains("sync pull"));
        assert!(format!("{}", error).contains("fatal: no remote"));

        let error = SyncError::Spawn {
            step: "commit",
            program: "git".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(format!("{}", error).contains("sync commit"));
        assert!(format!("{}", error).contains("'git'"));
    }

    #[test]
    fn test_editor_error_variants() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "command not found");
        let error = EditorError::CommandNotFound {
            command: "vim".to_string(),
            source: io_error,
        };
        assert!(format!("{}", error).contains("not found"));
        assert!(format!("{}", error).contains("vim"));

        let error = EditorError::NonZeroExit {
            command: "vim".to_string(),
            status_code: 1,
        };
        assert!(format!("{}", error).contains("non-zero status code"));
    }
}
