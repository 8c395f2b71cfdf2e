//! Attachment commands: files stored next to a day's entry.

use crate::dates::{CalendarDate, DateResolver};
use crate::errors::AppResult;
use crate::journal::{attachment_path, Journal};
use crate::sync::Syncer;
use std::path::{Path, PathBuf};

/// Copies `source` into the day directory of `date`.
///
/// The source is checked before anything is pulled or created.
///
/// # Errors
///
/// - `AppError::Io` if `source` does not exist
/// - `AppError::InvalidFilename` if `source` is a directory or has an
///   unusable name
pub fn add_file(
    journal: &Journal,
    sync: &Syncer,
    date: CalendarDate,
    source: &Path,
) -> AppResult<PathBuf> {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    attachment_path(&journal.day_path(date), &name)?;
    sync.mutate(journal.root(), || journal.add_attachment(date, source))
}

/// Attachment names for the day token `token`.
///
/// Pulls once, then resolves the token against the freshly pulled aliases.
pub fn list_files(
    journal: &Journal,
    sync: &Syncer,
    resolver: &DateResolver,
    token: &str,
) -> AppResult<Vec<String>> {
    sync.pull_or_warn(journal.root());
    let date = super::resolve_date(journal, resolver, token)?;
    journal.attachments(date)
}

/// Deletes attachment `name` of `date`.
///
/// # Errors
///
/// Returns `AppError::AttachmentNotFound` if there is no such attachment.
pub fn remove_file(
    journal: &Journal,
    sync: &Syncer,
    date: CalendarDate,
    name: &str,
) -> AppResult<()> {
    attachment_path(&journal.day_path(date), name)?;
    sync.mutate(journal.root(), || journal.remove_attachment(date, name))
}

/// Copies attachment `name` of `date` to `destination`.
///
/// # Errors
///
/// Returns `AppError::AttachmentNotFound` if there is no such attachment.
pub fn copy_file(
    journal: &Journal,
    sync: &Syncer,
    date: CalendarDate,
    name: &str,
    destination: &Path,
) -> AppResult<()> {
    attachment_path(&journal.day_path(date), name)?;
    sync.mutate(journal.root(), || {
        journal.copy_attachment(date, name, destination)
    })
}
