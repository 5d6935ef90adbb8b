/*!
# rapidlog - A Bullet-Journal Tool

rapidlog is a command-line bullet journal. It keeps typed log entries
(notes, tasks, events, habits) in a single snapshot file, and renders them
as a chronological listing or as weekly/monthly/habit spreads.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```text
rapidlog [COMMAND]

Commands:
  list        List every entry, newest first (the default)
  add         Add a new entry
  complete    Mark the task at INDEX complete
  migrate     Mark the task at INDEX migrated
  event-done  Mark the event at INDEX complete
  habit-done  Mark the habit at INDEX done for today
  week        Show the weekly spread
  month       Show the monthly spread
  habits      Show the 7-day habit tracker
```

## Configuration

The application can be configured with the following environment variables:
- `RAPIDLOG_DIR`: The directory holding the journal snapshot
  (defaults to "~/Documents/rapidlog")
- `RUST_LOG`: Log filter for diagnostics (e.g. "rapidlog=debug")
*/

use chrono::{Datelike, Local};
use clap::Parser;
use rapidlog::cli::{parse_date_arg, CliArgs, Command};
use rapidlog::config::Config;
use rapidlog::errors::{AppError, AppResult};
use rapidlog::ops;
use rapidlog::store::Store;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the rapidlog application.
///
/// Coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Obtains the current date/time once
/// 3. Parses command-line arguments
/// 4. Loads and validates configuration
/// 5. Builds the store handle and dispatches the chosen command
fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Obtain current date/time once; everything downstream takes it as a
    // parameter instead of reading the clock.
    let now = Local::now().naive_local();
    let today = now.date();

    let args = CliArgs::parse();
    debug!(?args, "parsed CLI arguments");

    info!("loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!(path = %config.journal_file().display(), "using journal snapshot");

    let store = Store::new(config.journal_file());

    match args.command.unwrap_or(Command::List) {
        Command::List => ops::list(&store, now),
        Command::Add {
            kind,
            content,
            signifier,
            location,
            frequency,
        } => ops::add(
            &store,
            now,
            kind,
            &content,
            signifier.as_deref(),
            location,
            frequency,
        ),
        Command::Complete { index } => ops::complete_task(&store, now, index),
        Command::Migrate { index } => ops::migrate_task(&store, now, index),
        Command::EventDone { index } => ops::complete_event(&store, now, index),
        Command::HabitDone { index } => ops::mark_habit(&store, now, index),
        Command::Week { date } => {
            let reference = resolve_date(date.as_deref(), today)?;
            ops::week(&store, now, reference)
        }
        Command::Month { year, month } => ops::month(
            &store,
            now,
            year.unwrap_or_else(|| today.year()),
            month.unwrap_or_else(|| today.month()),
        ),
        Command::Habits { date } => {
            let reference = resolve_date(date.as_deref(), today)?;
            ops::habits(&store, now, reference)
        }
    }
}

fn resolve_date(
    raw: Option<&str>,
    today: chrono::NaiveDate,
) -> AppResult<chrono::NaiveDate> {
    match raw {
        None => Ok(today),
        Some(value) => parse_date_arg(value)
            .map_err(|e| AppError::Input(format!("Invalid date '{}': {}", value, e))),
    }
}
