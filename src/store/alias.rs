//! Named aliases for calendar dates.
//!
//! Stored as `name=year/month/day`, one per line, in the `aliases` file at the
//! journal root. Names are unique keys (the last line wins on reload); several
//! names may point at the same day.

use super::{read_records, write_records};
use crate::constants::{ALIAS_FILE, ALIAS_SEPARATOR};
use crate::dates::CalendarDate;
use crate::errors::{AppError, AppResult};
use crate::sync::Syncer;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// One `name=date` line of the alias file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// Alias name
    pub name: String,
    /// Stored date text, `year/month/day`
    pub date: String,
}

impl AliasRecord {
    /// Parses a record, splitting on the first `=`. Returns `None` when the
    /// separator is missing.
    pub fn parse(line: &str) -> Option<Self> {
        let (name, date) = line.split_once(ALIAS_SEPARATOR)?;
        Some(AliasRecord {
            name: name.to_string(),
            date: date.to_string(),
        })
    }
}

impl fmt::Display for AliasRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, ALIAS_SEPARATOR, self.date)
    }
}

/// The full set of aliases of one journal.
///
/// # Examples
///
/// ```
/// use daybook::store::AliasStore;
///
/// let mut aliases = AliasStore::default();
/// aliases.add("launch", "2025/3/14").unwrap();
/// assert_eq!(aliases.lookup("launch"), Some("2025/3/14"));
/// assert!(aliases.add("bad", "2025/3").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasStore {
    aliases: BTreeMap<String, String>,
}

impl AliasStore {
    /// Pulls, then reads the alias file of the journal at `root`.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// - `AppError::Parse` if any non-blank line lacks the `=` separator; the
    ///   whole load fails rather than dropping the line
    /// - `AppError::Io` if the file exists but cannot be read
    pub fn load(root: &Path, sync: &Syncer) -> AppResult<Self> {
        sync.pull_or_warn(root);
        Self::read(root)
    }

    /// Reads the alias file without syncing.
    pub fn read(root: &Path) -> AppResult<Self> {
        let path = root.join(ALIAS_FILE);
        let mut store = AliasStore::default();
        for line in read_records(&path)?.unwrap_or_default() {
            let record = AliasRecord::parse(&line).ok_or_else(|| AppError::Parse {
                kind: "alias",
                path: path.clone(),
                line: line.clone(),
            })?;
            store.aliases.insert(record.name, record.date);
        }
        Ok(store)
    }

    /// Writes the alias file, then pushes.
    pub fn save(&self, root: &Path, sync: &Syncer) -> AppResult<()> {
        write_records(&root.join(ALIAS_FILE), self.records().map(|record| record.to_string()))?;
        sync.push_or_warn(root);
        Ok(())
    }

    /// Adds or replaces `name`.
    ///
    /// The date text is stored as given once it parses as a real calendar date.
    ///
    /// # Errors
    ///
    /// - `AppError::Usage` for an empty name or one containing `=`
    /// - `AppError::Date` for a date that is not a valid `year/month/day`
    pub fn add(&mut self, name: &str, date: &str) -> AppResult<()> {
        validate_alias(name, date)?;
        self.aliases.insert(name.to_string(), date.to_string());
        Ok(())
    }

    /// Removes `name`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AliasNotFound` if no such alias exists.
    pub fn remove(&mut self, name: &str) -> AppResult<()> {
        self.aliases
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::AliasNotFound(name.to_string()))
    }

    /// Stored date text of `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Whether no aliases are defined.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// All aliases, sorted by name.
    pub fn records(&self) -> impl Iterator<Item = AliasRecord> + '_ {
        self.aliases.iter().map(|(name, date)| AliasRecord {
            name: name.clone(),
            date: date.clone(),
        })
    }
}

impl fmt::Display for AliasStore {
    /// Renders `name -> date` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .aliases
            .iter()
            .map(|(name, date)| format!("{} -> {}", name, date))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Checks that `name` can be stored as a key and `date` is a real
/// `year/month/day` date.
pub(crate) fn validate_alias(name: &str, date: &str) -> AppResult<()> {
    if name.is_empty() || name.contains(ALIAS_SEPARATOR) {
        return Err(AppError::Usage(format!("invalid alias name: {:?}", name)));
    }
    date.parse::<CalendarDate>()?;
    Ok(())
}
