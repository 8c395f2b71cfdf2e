/*!
# Daybook

Entry point of the `daybook` binary: parses arguments, sets up logging,
loads configuration and dispatches to the journal operations.

## Usage

```text
daybook [OPTIONS] <JOURNAL> <COMMAND>

Commands:
  init      Initialize a new journal
  edit      Edit an entry
  print     Print an entry
  todo      List todos, or add and complete them
  search    Search within the journal's entries
  calendar  Show a calendar of entries
  list      List all days with entries
  sync      Pull and push the journal now, whatever its config says
  alias     List named aliases to dates, or add and remove them
  files     Manage files attached to entries

Options:
  -b, --base <BASE>              Directory holding journals (overrides DAYBOOK_DIR)
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -v, --verbose                  Print verbose diagnostics to stderr
```

Any unique prefix of a command name works: `daybook work ed t`.

## Configuration

- `DAYBOOK_DIR`: directory holding journals (defaults to `~/.daybook`)
- `DAYBOOK_EDITOR` or `EDITOR`: editor for entries (defaults to `vim`)
- `RUST_LOG`: log filter, overriding the default `warn` level
*/

use clap::Parser;
use daybook::cli::{AliasCommand, CliArgs, Command, FilesCommand, TodoCommand};
use daybook::config::Config;
use daybook::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, VERBOSE_LOG_LEVEL};
use daybook::dates::DateResolver;
use daybook::editor::SystemEditor;
use daybook::errors::AppResult;
use daybook::journal::Journal;
use daybook::scan::{self, GrepSearch};
use daybook::sync::Syncer;
use daybook::ops;
use std::io::{self, IsTerminal, Write};
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();
    init_tracing(&args);
    debug!("CLI arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);
    // A subscriber may already be installed; keep it.
    let _ = if args.log_format == LOG_FORMAT_JSON {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::load(args.base.as_deref())?;
    debug!("Loaded configuration: {:?}", config);
    let root = config.journal_root(&args.journal);
    let mut out = io::stdout().lock();

    match args.command {
        Command::Init => {
            Journal::init(&root)?;
        }
        Command::Search { term } => {
            // Any directory can be searched, journal or not.
            for line in scan::search_entries(&root, &term, &GrepSearch::default())? {
                writeln!(out, "{}", line)?;
            }
        }
        command => {
            let journal = Journal::open(&root)?;
            let sync = Syncer::default();
            let resolver = DateResolver::from_clock();
            run_journal_command(&journal, &sync, &resolver, &config, command, &mut out)?;
        }
    }
    Ok(())
}

fn run_journal_command(
    journal: &Journal,
    sync: &Syncer,
    resolver: &DateResolver,
    config: &Config,
    command: Command,
    out: &mut impl Write,
) -> AppResult<()> {
    match command {
        Command::Edit { date } => {
            let editor = SystemEditor::new(config.validated_editor()?);
            let date = ops::resolve_date(journal, resolver, &date)?;
            ops::edit_entry(journal, sync, &editor, date)?;
        }
        Command::Print { date } => {
            out.write_all(&ops::print_entry(journal, sync, resolver, &date)?)?;
        }
        Command::Todo { action: None } => {
            let todos = ops::list_todos(journal, sync)?;
            if !todos.items().is_empty() {
                writeln!(out, "{}", todos)?;
            }
        }
        Command::Todo {
            action: Some(TodoCommand::Add { text }),
        } => {
            ops::add_todo(journal, sync, &text)?;
        }
        Command::Todo {
            action: Some(TodoCommand::Complete { index }),
        } => {
            ops::complete_todo(journal, sync, index)?;
        }
        Command::Calendar { month } => {
            let month = resolver.resolve_month(month.as_deref())?;
            let color = io::stdout().is_terminal();
            write!(out, "{}", ops::show_calendar(journal, sync, month, color))?;
        }
        Command::List => {
            for date in ops::list_entries(journal, sync) {
                writeln!(out, "{}", date)?;
            }
        }
        Command::Sync => {
            let report = sync.sync_now(journal.root());
            if !report.is_clean() {
                info!("Sync finished with errors");
            }
        }
        Command::Alias { action: None } => {
            let aliases = ops::list_aliases(journal, sync)?;
            if !aliases.is_empty() {
                writeln!(out, "{}", aliases)?;
            }
        }
        Command::Alias {
            action: Some(AliasCommand::Add { name, date }),
        } => {
            ops::add_alias(journal, sync, &name, &date)?;
        }
        Command::Alias {
            action: Some(AliasCommand::Remove { name }),
        } => {
            ops::remove_alias(journal, sync, &name)?;
        }
        Command::Files { action } => run_files_command(journal, sync, resolver, action, out)?,
        Command::Init | Command::Search { .. } => {}
    }
    Ok(())
}

fn run_files_command(
    journal: &Journal,
    sync: &Syncer,
    resolver: &DateResolver,
    action: FilesCommand,
    out: &mut impl Write,
) -> AppResult<()> {
    match action {
        FilesCommand::Add { date, path } => {
            let date = ops::resolve_date(journal, resolver, &date)?;
            ops::add_file(journal, sync, date, &path)?;
        }
        FilesCommand::List { date } => {
            for name in ops::list_files(journal, sync, resolver, &date)? {
                writeln!(out, "{}", name)?;
            }
        }
        FilesCommand::Remove { date, name } => {
            let date = ops::resolve_date(journal, resolver, &date)?;
            ops::remove_file(journal, sync, date, &name)?;
        }
        FilesCommand::Copy {
            date,
            name,
            destination,
        } => {
            let date = ops::resolve_date(journal, resolver, &date)?;
            ops::copy_file(journal, sync, date, &name, &destination)?;
        }
    }
    Ok(())
}
