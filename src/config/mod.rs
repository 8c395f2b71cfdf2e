//! Configuration management for the daybook application.
//!
//! Two layers of configuration exist:
//!
//! - [`Config`]: process-wide settings from environment variables (where
//!   journals live and which editor to launch).
//! - [`JournalConfig`]: per-journal `key=value` settings stored in the
//!   journal's marker file. It is re-read on every sync decision.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DIR`: Directory holding journals (defaults to ~/.daybook)
//! - `DAYBOOK_EDITOR`: Editor to use for journal entries
//! - `EDITOR`: Fallback editor if DAYBOOK_EDITOR is not set (defaults to "vim")

use crate::constants::{
    CONFIG_KEY_SYNC, CONFIG_SEPARATOR, DEFAULT_BASE_DIR, DEFAULT_EDITOR_COMMAND,
    EDITOR_FORBIDDEN_CHARS, ENV_VAR_DAYBOOK_DIR, ENV_VAR_DAYBOOK_EDITOR, ENV_VAR_EDITOR,
    JOURNAL_MARKER_FILE, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::store;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration for the daybook application.
///
/// # Examples
///
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     editor: "nano".to_string(),
///     base_dir: PathBuf::from("/path/to/journals"),
/// };
/// assert_eq!(config.journal_root("work"), PathBuf::from("/path/to/journals/work"));
/// ```
pub struct Config {
    /// Editor command to use for opening journal entries.
    ///
    /// Loaded from `DAYBOOK_EDITOR`, then `EDITOR`, defaulting to "vim".
    /// Stored as given; see [`Config::validated_editor`].
    pub editor: String,

    /// Directory that holds one subdirectory per journal.
    pub base_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("editor", &REDACTED_PLACEHOLDER)
            .field("base_dir", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: DEFAULT_EDITOR_COMMAND.to_string(),
            base_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Validates an editor command string for security.
    ///
    /// The command must be non-empty and free of spaces and shell
    /// metacharacters; editors that need arguments go behind a wrapper script.
    fn validate_editor_command(editor_cmd: &str) -> AppResult<&str> {
        if editor_cmd.is_empty() {
            return Err(AppError::Config(
                "Editor command cannot be empty".to_string(),
            ));
        }

        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
            ));
        }

        if let Some(ch) = EDITOR_FORBIDDEN_CHARS
            .iter()
            .find(|&&ch| editor_cmd.contains(ch))
        {
            return Err(AppError::Config(format!(
                "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
                ch
            )));
        }

        Ok(editor_cmd)
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// `base_override` (the `--base` flag) takes precedence over `DAYBOOK_DIR`.
    /// The base directory is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the expanded path
    /// is empty. The editor is not validated here.
    pub fn load(base_override: Option<&str>) -> AppResult<Self> {
        let editor = env::var(ENV_VAR_DAYBOOK_EDITOR)
            .or_else(|_| env::var(ENV_VAR_EDITOR))
            .unwrap_or_else(|_| DEFAULT_EDITOR_COMMAND.to_string());

        let base_raw = match base_override {
            Some(base) => base.to_string(),
            None => env::var(ENV_VAR_DAYBOOK_DIR).unwrap_or_else(|_| DEFAULT_BASE_DIR.to_string()),
        };

        let expanded = shellexpand::full(&base_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let base_dir = PathBuf::from(expanded.into_owned());

        if base_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal base directory path is empty".to_string(),
            ));
        }

        Ok(Config { editor, base_dir })
    }

    /// The editor command, checked for use as a bare program name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the command is empty or contains spaces
    /// or shell metacharacters.
    pub fn validated_editor(&self) -> AppResult<&str> {
        Config::validate_editor_command(&self.editor)
    }

    /// Root directory of the journal called `name`.
    pub fn journal_root(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

/// Per-journal settings read from the marker file.
///
/// # Examples
///
/// ```
/// use daybook::config::JournalConfig;
///
/// let config = JournalConfig::parse(["git=true"]).unwrap();
/// assert!(config.sync_enabled().unwrap());
///
/// let config = JournalConfig::parse(Vec::<String>::new()).unwrap();
/// assert!(!config.sync_enabled().unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalConfig {
    values: HashMap<String, String>,
}

impl JournalConfig {
    /// Reads the marker file of the journal at `root`.
    ///
    /// # Errors
    ///
    /// - `AppError::Io` if the marker is missing or unreadable
    /// - `AppError::Parse` if any non-blank line is not exactly `key=value`
    pub fn load(root: &Path) -> AppResult<Self> {
        let path = root.join(JOURNAL_MARKER_FILE);
        let lines = store::read_records(&path)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })?;

        Self::parse(lines).map_err(|line| AppError::Parse {
            kind: "config",
            path,
            line,
        })
    }

    /// Parses `key=value` records; on failure returns the offending line.
    pub fn parse<I, S>(lines: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();
        for line in lines {
            let line = line.as_ref();
            let parts: Vec<&str> = line.split(CONFIG_SEPARATOR).collect();
            match parts.as_slice() {
                [key, value] => {
                    values.insert(key.to_string(), value.to_string());
                }
                _ => return Err(line.to_string()),
            }
        }
        Ok(JournalConfig { values })
    }

    /// Raw value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether git sync is enabled. An absent or empty value means disabled.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the value is set but not a boolean.
    pub fn sync_enabled(&self) -> AppResult<bool> {
        match self.get(CONFIG_KEY_SYNC) {
            None | Some("") => Ok(false),
            Some(value) => parse_bool(value).ok_or_else(|| {
                AppError::Config(format!(
                    "invalid boolean for '{}': {}",
                    CONFIG_KEY_SYNC, value
                ))
            }),
        }
    }
}

/// Accepts the spellings journals have historically used for booleans.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
