//! Storage addressing for a journal tree.
//!
//! A journal is a directory holding a marker file. Each day lives at
//! `root/year/month/day` with unpadded decimal components. A day directory
//! holds at most one entry (the file named `entry`) and any number of
//! attachments (every other regular file). Day directories are created on
//! first write and never on read.

use crate::constants::{ENTRY_FILE, JOURNAL_MARKER_FILE};
use crate::dates::{CalendarDate, YearMonth};
use crate::errors::{AppError, AppResult};
use crate::store;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory of the day `date` under `root`.
///
/// # Examples
///
/// ```
/// use daybook::dates::CalendarDate;
/// use daybook::journal::day_path;
/// use std::path::Path;
///
/// let date = CalendarDate::new(2025, 1, 6).unwrap();
/// assert_eq!(day_path(Path::new("/j"), date), Path::new("/j/2025/1/6"));
/// ```
pub fn day_path(root: &Path, date: CalendarDate) -> PathBuf {
    root.join(date.year().to_string())
        .join(date.month().to_string())
        .join(date.day().to_string())
}

/// Directory of the month `month` under `root`.
pub fn month_path(root: &Path, month: YearMonth) -> PathBuf {
    root.join(month.year().to_string())
        .join(month.month().to_string())
}

/// Entry file inside a day directory.
pub fn entry_path(day: &Path) -> PathBuf {
    day.join(ENTRY_FILE)
}

/// Attachment file `filename` inside a day directory.
///
/// # Errors
///
/// Returns `AppError::InvalidFilename` for names that would escape the day
/// directory or collide with the entry.
pub fn attachment_path(day: &Path, filename: &str) -> AppResult<PathBuf> {
    validate_attachment_name(filename)?;
    Ok(day.join(filename))
}

fn validate_attachment_name(filename: &str) -> AppResult<()> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename == ENTRY_FILE
        || filename.contains('/')
        || filename.contains(std::path::MAIN_SEPARATOR);
    if invalid {
        return Err(AppError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Names of the attachments in a day directory, sorted.
///
/// A day directory that does not exist has no attachments. Subdirectories and
/// the entry file are excluded.
pub fn list_attachments(day: &Path) -> io::Result<Vec<String>> {
    let dir = match fs::read_dir(day) {
        Ok(dir) => dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut names = Vec::new();
    for item in dir {
        let item = item?;
        if item.file_type()?.is_dir() {
            continue;
        }
        let name = item.file_name().to_string_lossy().into_owned();
        if name != ENTRY_FILE {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// A journal root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    root: PathBuf,
}

impl Journal {
    /// Creates a new journal at `root`: the directory and an empty marker.
    ///
    /// # Errors
    ///
    /// - `AppError::AlreadyExists` if anything already exists at `root`
    /// - `AppError::Io` if the directory or marker cannot be created
    pub fn init(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        match fs::symlink_metadata(&root) {
            Ok(_) => return Err(AppError::AlreadyExists(root)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::create_dir_all(&root)?;
        store::touch(&root.join(JOURNAL_MARKER_FILE))?;
        info!("Initialized journal at {}", root.display());
        Ok(Journal { root })
    }

    /// Opens the journal at `root`, requiring its marker file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotAJournal` if the marker is missing.
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        if let Err(source) = fs::metadata(root.join(JOURNAL_MARKER_FILE)) {
            return Err(AppError::NotAJournal { path: root, source });
        }
        debug!("Opened journal at {}", root.display());
        Ok(Journal { root })
    }

    /// The journal root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the day `date`.
    pub fn day_path(&self, date: CalendarDate) -> PathBuf {
        day_path(&self.root, date)
    }

    /// Directory of the month `month`.
    pub fn month_path(&self, month: YearMonth) -> PathBuf {
        month_path(&self.root, month)
    }

    /// Makes sure the entry file for `date` exists, creating the day
    /// directory and an empty entry as needed. Existing content is kept.
    pub fn prepare_entry(&self, date: CalendarDate) -> AppResult<PathBuf> {
        let day = self.day_path(date);
        fs::create_dir_all(&day)?;
        let path = entry_path(&day);
        OpenOptions::new().create(true).append(true).open(&path)?;
        debug!("Prepared entry {}", path.display());
        Ok(path)
    }

    /// Contents of the entry for `date`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EntryNotFound` when the day has no entry file.
    pub fn read_entry(&self, date: CalendarDate) -> AppResult<Vec<u8>> {
        let path = entry_path(&self.day_path(date));
        match fs::read(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AppError::EntryNotFound(date.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Copies the file at `source` into the day directory of `date` under
    /// its own file name, replacing any attachment of that name.
    ///
    /// # Errors
    ///
    /// - `AppError::Io` if `source` cannot be read
    /// - `AppError::InvalidFilename` if `source` is a directory or its name is
    ///   not a valid attachment name
    pub fn add_attachment(&self, date: CalendarDate, source: &Path) -> AppResult<PathBuf> {
        let metadata = fs::metadata(source).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("cannot access file {}: {}", source.display(), e),
            )
        })?;
        if metadata.is_dir() {
            return Err(AppError::InvalidFilename(format!(
                "cannot add directory: {}",
                source.display()
            )));
        }

        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::InvalidFilename(source.display().to_string()))?;
        let day = self.day_path(date);
        let target = attachment_path(&day, &name)?;

        fs::create_dir_all(&day)?;
        fs::copy(source, &target)?;
        info!("Attached {} to {}", name, date);
        Ok(target)
    }

    /// Names of the attachments of `date`.
    pub fn attachments(&self, date: CalendarDate) -> AppResult<Vec<String>> {
        Ok(list_attachments(&self.day_path(date))?)
    }

    /// Deletes attachment `name` of `date`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AttachmentNotFound` if there is no such file.
    pub fn remove_attachment(&self, date: CalendarDate, name: &str) -> AppResult<()> {
        let path = self.existing_attachment(date, name)?;
        fs::remove_file(&path)?;
        info!("Removed attachment {} from {}", name, date);
        Ok(())
    }

    /// Copies attachment `name` of `date` out to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AttachmentNotFound` if there is no such file.
    pub fn copy_attachment(
        &self,
        date: CalendarDate,
        name: &str,
        destination: &Path,
    ) -> AppResult<()> {
        let path = self.existing_attachment(date, name)?;
        fs::copy(&path, destination)?;
        debug!("Copied {} to {}", path.display(), destination.display());
        Ok(())
    }

    fn existing_attachment(&self, date: CalendarDate, name: &str) -> AppResult<PathBuf> {
        let path = attachment_path(&self.day_path(date), name)?;
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => Ok(path),
            _ => Err(AppError::AttachmentNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn journal() -> (TempDir, Journal) {
        let dir = tempdir().unwrap();
        let journal = Journal::init(dir.path().join("j")).unwrap();
        (dir, journal)
    }

    #[test]
    fn test_day_path_is_unpadded() {
        let root = Path::new("/root");
        assert_eq!(
            day_path(root, date(2025, 1, 6)),
            Path::new("/root").join("2025").join("1").join("6")
        );
        assert_eq!(
            entry_path(&day_path(root, date(2025, 10, 31))),
            Path::new("/root/2025/10/31/entry")
        );
    }

    #[test]
    fn test_attachment_names_are_validated() {
        let day = Path::new("/root/2025/1/6");
        assert_eq!(
            attachment_path(day, "photo.jpg").unwrap(),
            day.join("photo.jpg")
        );
        for bad in ["", ".", "..", "entry", "../escape", "a/b"] {
            assert!(
                matches!(attachment_path(day, bad), Err(AppError::InvalidFilename(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_init_and_open() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("j");

        assert!(matches!(
            Journal::open(&root),
            Err(AppError::NotAJournal { .. })
        ));

        Journal::init(&root).unwrap();
        assert!(root.join(JOURNAL_MARKER_FILE).is_file());
        assert!(Journal::open(&root).is_ok());

        assert!(matches!(
            Journal::init(&root),
            Err(AppError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_read_does_not_create_day_directory() {
        let (_dir, journal) = journal();
        let day = date(2025, 2, 3);

        assert!(matches!(
            journal.read_entry(day),
            Err(AppError::EntryNotFound(_))
        ));
        assert!(journal.attachments(day).unwrap().is_empty());
        assert!(!journal.day_path(day).exists());
    }

    #[test]
    fn test_prepare_entry_keeps_content() {
        let (_dir, journal) = journal();
        let day = date(2025, 2, 3);

        let path = journal.prepare_entry(day).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        fs::write(&path, "dear diary").unwrap();
        journal.prepare_entry(day).unwrap();
        assert_eq!(journal.read_entry(day).unwrap(), b"dear diary");
    }

    #[test]
    fn test_attachment_lifecycle() {
        let (dir, journal) = journal();
        let day = date(2024, 12, 31);

        let source = dir.path().join("ticket.pdf");
        fs::write(&source, "pdf bytes").unwrap();

        journal.prepare_entry(day).unwrap();
        journal.add_attachment(day, &source).unwrap();
        fs::create_dir_all(journal.day_path(day).join("nested")).unwrap();

        assert_eq!(journal.attachments(day).unwrap(), vec!["ticket.pdf"]);

        let out = dir.path().join("copy.pdf");
        journal.copy_attachment(day, "ticket.pdf", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "pdf bytes");

        journal.remove_attachment(day, "ticket.pdf").unwrap();
        assert!(journal.attachments(day).unwrap().is_empty());

        assert!(matches!(
            journal.remove_attachment(day, "ticket.pdf"),
            Err(AppError::AttachmentNotFound(_))
        ));
        assert!(matches!(
            journal.copy_attachment(day, "nested", &out),
            Err(AppError::AttachmentNotFound(_))
        ));
    }

    #[test]
    fn test_add_attachment_rejects_directories_and_missing_sources() {
        let (dir, journal) = journal();
        let day = date(2024, 1, 1);

        assert!(matches!(
            journal.add_attachment(day, dir.path()),
            Err(AppError::InvalidFilename(_))
        ));
        assert!(matches!(
            journal.add_attachment(day, &dir.path().join("missing")),
            Err(AppError::Io(_))
        ));
        assert!(!journal.day_path(day).exists());
    }

    #[test]
    fn test_add_attachment_named_entry_is_rejected() {
        let (dir, journal) = journal();
        let source = dir.path().join("entry");
        fs::write(&source, "x").unwrap();

        assert!(matches!(
            journal.add_attachment(date(2024, 1, 1), &source),
            Err(AppError::InvalidFilename(_))
        ));
    }
}
