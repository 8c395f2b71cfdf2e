/*!
# Daybook

Daybook is a command-line journal. Entries and attached files are addressed
by calendar date and stored as plain files in a `year/month/day` directory
tree, optionally kept in sync with a git remote.

## Core Features

- Edit and print the entry of any day, named explicitly (`2025/1/6`), by a
  relative keyword (`today`, `yesterday`, `tomorrow`) or by an alias
- Attach arbitrary files to a day
- Keep a todo list and named date aliases next to the entries
- Browse a month calendar or a chronological list of entries
- Search entries with `grep`
- Pull before and push after every command when git sync is enabled

## Architecture

- `dates`: turning tokens into validated calendar dates and months
- `matching`: unique-prefix matching of keywords
- `store`: the line-oriented alias and todo files
- `journal`: mapping dates to paths, entries and attachments
- `sync`: the pull-before/push-after discipline and the git backend
- `scan`: whole-tree queries and search
- `ops`: user-facing operations combining the above
- `cli`, `config`, `editor`, `calendar`, `errors`: the ambient pieces

## Usage Example

```rust,no_run
use daybook::dates::DateResolver;
use daybook::editor::SystemEditor;
use daybook::journal::Journal;
use daybook::sync::Syncer;
use daybook::{ops, Config};

fn main() -> daybook::AppResult<()> {
    let config = Config::load(None)?;
    let journal = Journal::open(config.journal_root("personal"))?;
    let sync = Syncer::default();

    let editor = SystemEditor::new(config.validated_editor()?);
    let date = ops::resolve_date(&journal, &DateResolver::from_clock(), "today")?;
    ops::edit_entry(&journal, &sync, &editor, date)?;
    Ok(())
}
```
*/

/// Month grid rendering
pub mod calendar;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Date tokens, calendar dates and months
pub mod dates;
/// External editor abstraction
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Storage addressing and the journal root
pub mod journal;
/// Unique-prefix matching
pub mod matching;
/// User-facing operations
pub mod ops;
/// Whole-tree scans and search
pub mod scan;
/// Alias and todo stores
pub mod store;
/// Remote synchronization
pub mod sync;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use dates::{CalendarDate, DateResolver, YearMonth};
pub use errors::{AppError, AppResult};
pub use journal::Journal;
pub use sync::Syncer;
