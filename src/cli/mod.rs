//! Command-line interface for the rapidlog application.
//!
//! One subcommand per journal action, mirroring the actions of a bullet
//! journal session: add an entry, transition a task/event/habit by its
//! displayed index, and open the weekly/monthly/habit spreads. Running with
//! no subcommand lists the journal.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// A bullet-journal tool for rapid logging
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// The entry kind chosen when adding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Note,
    Task,
    Event,
    Habit,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List every entry, newest first (the default)
    List,

    /// Add a new entry
    Add {
        /// Kind of entry to add
        #[arg(value_enum)]
        kind: KindArg,

        /// The entry text
        content: String,

        /// Signifier glyph: *, ! or ?
        #[arg(short, long)]
        signifier: Option<String>,

        /// Event location (events only)
        #[arg(short, long)]
        location: Option<String>,

        /// Habit frequency label (habits only; defaults to Daily)
        #[arg(short, long)]
        frequency: Option<String>,
    },

    /// Mark the task at INDEX complete
    Complete {
        /// 1-based index as shown by `list`
        index: usize,
    },

    /// Mark the task at INDEX migrated
    Migrate {
        /// 1-based index as shown by `list`
        index: usize,
    },

    /// Mark the event at INDEX complete
    EventDone {
        /// 1-based index as shown by `list`
        index: usize,
    },

    /// Mark the habit at INDEX done for today
    HabitDone {
        /// 1-based index as shown by `list`
        index: usize,
    },

    /// Show the weekly spread
    Week {
        /// Reference date (YYYY-MM-DD or YYYYMMDD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the monthly spread
    Month {
        /// Year; defaults to the current year
        #[arg(long)]
        year: Option<i32>,

        /// Month (1-12); defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },

    /// Show the 7-day habit tracker
    Habits {
        /// Reference date (YYYY-MM-DD or YYYYMMDD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["rapidlog"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_add_task_with_signifier() {
        let args = CliArgs::parse_from(vec![
            "rapidlog", "add", "task", "Buy milk", "--signifier", "*",
        ]);
        match args.command {
            Some(Command::Add {
                kind,
                content,
                signifier,
                location,
                frequency,
            }) => {
                assert_eq!(kind, KindArg::Task);
                assert_eq!(content, "Buy milk");
                assert_eq!(signifier.as_deref(), Some("*"));
                assert!(location.is_none());
                assert!(frequency.is_none());
            }
            other => panic!("Expected Add command, got {:?}", other),
        }
    }

    #[test]
    fn test_add_event_with_location() {
        let args = CliArgs::parse_from(vec![
            "rapidlog", "add", "event", "Standup", "--location", "Room 4",
        ]);
        match args.command {
            Some(Command::Add { kind, location, .. }) => {
                assert_eq!(kind, KindArg::Event);
                assert_eq!(location.as_deref(), Some("Room 4"));
            }
            other => panic!("Expected Add command, got {:?}", other),
        }
    }

    #[test]
    fn test_index_commands() {
        let args = CliArgs::parse_from(vec!["rapidlog", "complete", "3"]);
        assert_eq!(args.command, Some(Command::Complete { index: 3 }));

        let args = CliArgs::parse_from(vec!["rapidlog", "migrate", "2"]);
        assert_eq!(args.command, Some(Command::Migrate { index: 2 }));

        let args = CliArgs::parse_from(vec!["rapidlog", "event-done", "1"]);
        assert_eq!(args.command, Some(Command::EventDone { index: 1 }));

        let args = CliArgs::parse_from(vec!["rapidlog", "habit-done", "4"]);
        assert_eq!(args.command, Some(Command::HabitDone { index: 4 }));
    }

    #[test]
    fn test_view_commands() {
        let args = CliArgs::parse_from(vec!["rapidlog", "week", "--date", "2024-01-15"]);
        assert_eq!(
            args.command,
            Some(Command::Week {
                date: Some("2024-01-15".to_string())
            })
        );

        let args = CliArgs::parse_from(vec![
            "rapidlog", "month", "--year", "2024", "--month", "1",
        ]);
        assert_eq!(
            args.command,
            Some(Command::Month {
                year: Some(2024),
                month: Some(1)
            })
        );

        let args = CliArgs::parse_from(vec!["rapidlog", "habits"]);
        assert_eq!(args.command, Some(Command::Habits { date: None }));
    }

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);

        let date = parse_date_arg("20240115").unwrap();
        assert_eq!(date.day(), 15);

        assert!(parse_date_arg("not-a-date").is_err());
    }
}
