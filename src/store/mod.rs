//! Line-oriented text files kept at the journal root.
//!
//! Aliases, todos and the journal config are each a flat file with one record
//! per line. This module owns the raw read/write; the typed stores in the
//! submodules own parsing and serialization of their records.
//!
//! Writes truncate and rewrite the whole file in place. A crash mid-write can
//! leave a truncated file.

pub mod alias;
pub mod todo;

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub use alias::{AliasRecord, AliasStore};
pub use todo::TodoList;

/// Reads every line of `path`, trimmed, skipping blank lines.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_records(path: &Path) -> io::Result<Option<Vec<String>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            records.push(trimmed.to_string());
        }
    }
    Ok(Some(records))
}

/// Replaces the contents of `path` with `records`, one per line.
pub fn write_records<I, S>(path: &Path, records: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writer.write_all(record.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Creates an empty file at `path`, truncating any existing content.
pub fn touch(path: &Path) -> io::Result<()> {
    fs::write(path, b"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        assert!(read_records(&dir.path().join("absent")).unwrap().is_none());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list");
        fs::write(&path, "one\n\n   \n  two  \nthree").unwrap();

        let records = read_records(&path).unwrap().unwrap();
        assert_eq!(records, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_write_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list");
        fs::write(&path, "old\nstuff\nhere\n").unwrap();

        write_records(&path, ["new"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
