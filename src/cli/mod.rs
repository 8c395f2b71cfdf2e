//! Command-line interface definitions.
//!
//! Commands and subcommands accept any unique prefix of their name
//! (`daybook work ed t` edits today's entry of the `work` journal).

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_HELP, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, MONTH_HELP};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for daybook.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use daybook::cli::{CliArgs, Command};
///
/// let args = CliArgs::parse_from(["daybook", "work", "print", "today"]);
/// assert_eq!(args.journal, "work");
/// assert_eq!(args.command, Command::Print { date: "today".to_string() });
/// ```
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, version, long_about = None)]
#[command(infer_subcommands = true)]
pub struct CliArgs {
    /// Directory holding journals (overrides DAYBOOK_DIR)
    #[arg(short = 'b', long)]
    pub base: Option<String>,

    /// Log output format
    #[arg(long, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON], default_value = LOG_FORMAT_TEXT)]
    pub log_format: String,

    /// Print verbose diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Name of the journal under the base directory
    pub journal: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level journal commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize a new journal
    Init,

    /// Edit an entry
    Edit {
        #[arg(help = day_help())]
        date: String,
    },

    /// Print an entry
    Print {
        #[arg(help = day_help())]
        date: String,
    },

    /// List todos, or add and complete them
    #[command(infer_subcommands = true)]
    Todo {
        #[command(subcommand)]
        action: Option<TodoCommand>,
    },

    /// Search within the journal's entries
    Search {
        /// Text to look for
        term: String,
    },

    /// Show a calendar of entries
    Calendar {
        #[arg(help = month_help())]
        month: Option<String>,
    },

    /// List all days with entries
    List,

    /// Pull and push the journal now, whatever its config says
    Sync,

    /// List named aliases to dates, or add and remove them
    #[command(infer_subcommands = true)]
    Alias {
        #[command(subcommand)]
        action: Option<AliasCommand>,
    },

    /// Manage files attached to entries
    #[command(infer_subcommands = true)]
    Files {
        #[command(subcommand)]
        action: FilesCommand,
    },
}

/// `todo` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Add a todo item
    Add {
        /// Item text
        text: String,
    },
    /// Complete a todo item by number
    Complete {
        /// Zero-based item number
        index: usize,
    },
}

/// `alias` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AliasCommand {
    /// Add an alias: alias add <name> <year/month/day>
    Add {
        /// Alias name
        name: String,
        /// Date the alias points at
        date: String,
    },
    /// Remove an alias by name
    Remove {
        /// Alias name
        name: String,
    },
}

/// `files` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FilesCommand {
    /// Add a file to a day
    Add {
        #[arg(help = day_help())]
        date: String,
        /// File to copy into the journal
        path: PathBuf,
    },
    /// List files in a day
    List {
        #[arg(help = day_help())]
        date: String,
    },
    /// Remove a file from a day
    Remove {
        #[arg(help = day_help())]
        date: String,
        /// Attachment name
        name: String,
    },
    /// Copy a file out of the journal
    Copy {
        #[arg(help = day_help())]
        date: String,
        /// Attachment name
        name: String,
        /// Destination path
        destination: PathBuf,
    },
}

fn day_help() -> String {
    format!("today, yesterday, tomorrow, an alias, or {}", DATE_HELP)
}

fn month_help() -> String {
    format!("last, next, or {} (defaults to the current month)", MONTH_HELP)
}
