/*!
# rapidlog

rapidlog is a personal bullet-journal tool. It stores typed log entries
(notes, tasks, events, habits), renders them in chronological views, lets a
user move entries through their lifecycle (complete or migrate a task,
complete an event, check a habit off for a day), and persists the whole
collection to a single local snapshot file between runs.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `journal`: The entry data model and its state-transition rules
- `codec`: Snapshot serialization round-trip
- `store`: The on-disk snapshot file (load-all, save-all, range query)
- `views`: Read-only weekly/monthly/habit-grid projections
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `cli` / `ops`: The command-line presentation layer

The model, codec, store, and views never read the clock or render output;
the presentation layer supplies "now" and does all printing.

## Usage Example

```no_run
use rapidlog::{Config, Store};
use chrono::Local;

fn main() -> rapidlog::AppResult<()> {
    let now = Local::now().naive_local();

    let config = Config::load()?;
    config.validate()?;

    let store = Store::new(config.journal_file());
    let entries = store.load_all(now);
    println!("{} entries in the journal", entries.len());
    Ok(())
}
```
*/

/// Command-line interface for parsing user arguments
pub mod cli;
/// Snapshot serialization round-trip
pub mod codec;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The entry data model and its state-transition rules
pub mod journal;
/// Command handlers for the presentation layer
pub mod ops;
/// The on-disk snapshot store
pub mod store;
/// Read-only projections over the entry collection
pub mod views;

// Re-export important types for convenience
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Entry, EntryType, Journal, Kind, Signifier, TaskStatus};
pub use store::Store;
