//! Whole-tree queries over a journal: which days have entries or
//! attachments, and every entry date in chronological order.
//!
//! An entry only counts when its file is non-empty. Opening a day for edit
//! creates an empty entry file, and a day abandoned that way is not an entry.
//! Unreadable subtrees are skipped rather than failing the scan.

pub mod search;

use crate::constants::ENTRY_FILE;
use crate::dates::CalendarDate;
use crate::journal::list_attachments;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

pub use search::{search_entries, GrepSearch, LineSearch};

fn is_nonempty_entry(item: &DirEntry) -> bool {
    item.file_type().is_file()
        && item.file_name() == ENTRY_FILE
        && item.metadata().map(|m| m.len() > 0).unwrap_or(false)
}

/// Day numbers in a month directory whose entry is non-empty.
pub fn days_with_entries(month_path: &Path) -> BTreeSet<u32> {
    WalkDir::new(month_path)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(is_nonempty_entry)
        .filter_map(|item| {
            item.path()
                .parent()?
                .file_name()?
                .to_str()?
                .parse::<u32>()
                .ok()
        })
        .collect()
}

/// Day numbers in `1..=days_in_month` that have at least one attachment.
pub fn days_with_attachments(month_path: &Path, days_in_month: u32) -> BTreeSet<u32> {
    (1..=days_in_month)
        .filter(|day| {
            list_attachments(&month_path.join(day.to_string()))
                .map(|names| !names.is_empty())
                .unwrap_or(false)
        })
        .collect()
}

/// Every date under `root` with a non-empty entry, oldest first.
///
/// Only `year/month/day/entry` paths with numeric components forming a real
/// date are considered.
pub fn all_entry_dates(root: &Path) -> Vec<CalendarDate> {
    let mut dates: Vec<CalendarDate> = WalkDir::new(root)
        .min_depth(4)
        .max_depth(4)
        .into_iter()
        .filter_map(Result::ok)
        .filter(is_nonempty_entry)
        .filter_map(|item| {
            let relative = item.path().parent()?.strip_prefix(root).ok()?;
            let token = relative
                .components()
                .map(|c| c.as_os_str().to_str())
                .collect::<Option<Vec<&str>>>()?
                .join("/");
            token.parse::<CalendarDate>().ok()
        })
        .collect();
    dates.sort();
    debug!("Found {} entries under {}", dates.len(), root.display());
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{day_path, entry_path};
    use std::fs;
    use tempfile::tempdir;

    fn write_entry(root: &Path, y: i32, m: u32, d: u32, content: &str) {
        let day = day_path(root, CalendarDate::new(y, m, d).unwrap());
        fs::create_dir_all(&day).unwrap();
        fs::write(entry_path(&day), content).unwrap();
    }

    #[test]
    fn test_empty_entry_is_not_counted() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), 2025, 3, 1, "words");
        write_entry(dir.path(), 2025, 3, 2, "");

        let month = dir.path().join("2025").join("3");
        assert_eq!(days_with_entries(&month), BTreeSet::from([1]));

        let all: Vec<String> = all_entry_dates(dir.path())
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(all, vec!["2025/3/1"]);
    }

    #[test]
    fn test_chronological_listing_is_numeric() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), 2025, 9, 5, "a");
        write_entry(dir.path(), 2025, 10, 1, "b");
        write_entry(dir.path(), 2024, 12, 31, "c");

        let all: Vec<String> = all_entry_dates(dir.path())
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(all, vec!["2024/12/31", "2025/9/5", "2025/10/1"]);
    }

    #[test]
    fn test_stray_paths_are_ignored() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), 2025, 1, 1, "ok");

        // Not a real date, not numeric, and too shallow.
        for stray in ["2025/2/30", "2025/notes/1", "misc/x/y"] {
            let day = dir.path().join(stray);
            fs::create_dir_all(&day).unwrap();
            fs::write(day.join(ENTRY_FILE), "text").unwrap();
        }
        fs::write(dir.path().join(ENTRY_FILE), "text").unwrap();

        let all: Vec<String> = all_entry_dates(dir.path())
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(all, vec!["2025/1/1"]);
    }

    #[test]
    fn test_days_with_attachments() {
        let dir = tempdir().unwrap();
        let month = dir.path().join("2025").join("2");
        write_entry(dir.path(), 2025, 2, 3, "entry only");

        fs::create_dir_all(month.join("14")).unwrap();
        fs::write(month.join("14").join("card.png"), "png").unwrap();
        fs::create_dir_all(month.join("20").join("subdir")).unwrap();

        assert_eq!(days_with_attachments(&month, 28), BTreeSet::from([14]));
    }

    #[test]
    fn test_missing_month_is_empty() {
        let dir = tempdir().unwrap();
        let month = dir.path().join("1999").join("1");
        assert!(days_with_entries(&month).is_empty());
        assert!(days_with_attachments(&month, 31).is_empty());
    }
}
