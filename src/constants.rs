//! Constants used throughout the application.
//!
//! This module contains all constants used in the rapidlog application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "rapidlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A bullet-journal tool for rapid logging";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the rapidlog journal directory.
pub const ENV_VAR_RAPIDLOG_DIR: &str = "RAPIDLOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the journal within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "Documents/rapidlog";

// File System Parameters
/// File name of the journal snapshot inside the journal directory.
pub const JOURNAL_FILE_NAME: &str = "journal.json";
/// Default POSIX permissions for the journal directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Timestamp format used in the persisted snapshot (sortable, timezone-naive).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Timestamp format accepted on decode; tolerates fractional seconds.
pub const TIMESTAMP_FORMAT_LENIENT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Day-of-week and day format used in view headers (e.g. "Mon 03").
pub const DAY_HEADER_FORMAT: &str = "%a %d";
/// Time-of-day format used in listings.
pub const TIME_FORMAT: &str = "%H:%M";
/// Number of columns in the habit tracker grid.
pub const HABIT_GRID_DAYS: u64 = 7;

// Entry Defaults
/// Default frequency label for a new habit.
pub const DEFAULT_HABIT_FREQUENCY: &str = "Daily";
