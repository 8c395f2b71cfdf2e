//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A date-addressed journal with git-backed sync";

// CLI Arguments & Defaults
/// Default command for the editor if not specified otherwise.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the directory that holds journals.
pub const ENV_VAR_DAYBOOK_DIR: &str = "DAYBOOK_DIR";
/// Environment variable for specifying the preferred daybook editor.
pub const ENV_VAR_DAYBOOK_EDITOR: &str = "DAYBOOK_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Default base directory for journals, before expansion.
pub const DEFAULT_BASE_DIR: &str = "~/.daybook";
/// Journal config key that enables git sync.
pub const CONFIG_KEY_SYNC: &str = "git";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Journal Layout
/// Sentinel file marking an initialized journal; also holds its `key=value` config.
pub const JOURNAL_MARKER_FILE: &str = ".daybook";
/// Alias list file at the journal root.
pub const ALIAS_FILE: &str = "aliases";
/// Todo list file at the journal root.
pub const TODO_FILE: &str = "todo";
/// Reserved name of the entry file inside a day directory.
pub const ENTRY_FILE: &str = "entry";
/// Separator between the components of a date token.
pub const DATE_SEPARATOR: char = '/';
/// Separator between an alias name and its date.
pub const ALIAS_SEPARATOR: char = '=';
/// Separator between a config key and its value.
pub const CONFIG_SEPARATOR: char = '=';

// Date Keywords
/// Relative day keywords accepted wherever a day is expected.
pub const DAY_KEYWORDS: &[&str] = &["today", "yesterday", "tomorrow"];
/// Relative month keywords accepted by the calendar.
pub const MONTH_KEYWORDS: &[&str] = &["last", "next"];
/// Usage hint for explicit day tokens.
pub const DATE_HELP: &str = "year/month/day : Specific date";
/// Usage hint for explicit month tokens.
pub const MONTH_HELP: &str = "year/month : Specific month";

// Sync
/// Program used for remote synchronization.
pub const GIT_PROGRAM: &str = "git";
/// Prefix of the commit message written by a push.
pub const COMMIT_MESSAGE_PREFIX: &str = "daybook";

// Search
/// Program used for line-oriented entry search.
pub const GREP_PROGRAM: &str = "grep";
/// Exit status grep uses to report that nothing matched.
pub const GREP_NO_MATCH_STATUS: i32 = 1;
