//! Command handlers: the presentation glue over the core.
//!
//! Each handler loads the journal through the store, applies one operation
//! or derives one view, and prints the result. Mutating handlers save the
//! whole collection back before returning, so every invocation is a
//! complete load/apply/save round. All rendering lives here; the core never
//! prints.

use crate::cli::KindArg;
use crate::constants::{DAY_HEADER_FORMAT, DEFAULT_HABIT_FREQUENCY, TIME_FORMAT};
use crate::errors::{AppError, AppResult, EntryError};
use crate::journal::{Entry, Journal, Kind, Signifier};
use crate::store::Store;
use crate::views;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::info;

/// Prints the whole journal, newest first.
pub fn list(store: &Store, now: NaiveDateTime) -> AppResult<()> {
    let journal = load_journal(store, now)?;
    let today = now.date();

    println!("{}", "-".repeat(60));
    println!("JOURNAL ENTRIES (newest first):");
    for (i, entry) in journal.display().into_iter().enumerate() {
        println!("{}", format_entry(entry, i + 1, today));
    }
    println!("{}", "-".repeat(60));
    Ok(())
}

/// Adds a new entry built from the user-supplied field values.
pub fn add(
    store: &Store,
    now: NaiveDateTime,
    kind: KindArg,
    content: &str,
    signifier: Option<&str>,
    location: Option<String>,
    frequency: Option<String>,
) -> AppResult<()> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Input("Content cannot be empty".to_string()));
    }
    if location.is_some() && kind != KindArg::Event {
        return Err(AppError::Input(
            "`--location` only applies to events".to_string(),
        ));
    }
    if frequency.is_some() && kind != KindArg::Habit {
        return Err(AppError::Input(
            "`--frequency` only applies to habits".to_string(),
        ));
    }

    let signifier = parse_signifier(signifier)?;
    let entry = match kind {
        KindArg::Note => Entry::note(content.to_string(), signifier, now),
        KindArg::Task => Entry::task(content.to_string(), signifier, now),
        KindArg::Event => Entry::event(content.to_string(), signifier, location, now),
        KindArg::Habit => Entry::habit(
            content.to_string(),
            signifier,
            frequency.unwrap_or_else(|| DEFAULT_HABIT_FREQUENCY.to_string()),
            now,
        ),
    };

    let mut journal = load_journal(store, now)?;
    journal.push(entry);
    store.save_all(journal.entries())?;
    println!("Entry added: {}", content);
    Ok(())
}

/// Marks the task at the given display index complete.
pub fn complete_task(store: &Store, now: NaiveDateTime, index: usize) -> AppResult<()> {
    mutate(store, now, index, "marked complete (×)", |entry| {
        entry.complete_task()
    })
}

/// Marks the task at the given display index migrated.
pub fn migrate_task(store: &Store, now: NaiveDateTime, index: usize) -> AppResult<()> {
    mutate(store, now, index, "marked migrated (>)", |entry| {
        entry.migrate_task()
    })
}

/// Marks the event at the given display index complete.
pub fn complete_event(store: &Store, now: NaiveDateTime, index: usize) -> AppResult<()> {
    mutate(store, now, index, "marked complete (✓)", |entry| {
        entry.complete_event()
    })
}

/// Marks the habit at the given display index done for today.
pub fn mark_habit(store: &Store, now: NaiveDateTime, index: usize) -> AppResult<()> {
    let today = now.date();
    mutate(store, now, index, "checked off for today (✓)", |entry| {
        entry.mark_habit_complete(today)
    })
}

/// Prints the weekly spread around `reference`.
pub fn week(store: &Store, now: NaiveDateTime, reference: NaiveDate) -> AppResult<()> {
    let journal = load_journal(store, now)?;
    let (start, end) = views::week_window(reference);
    let view = views::weekly_view(journal.entries(), reference);

    println!("--- WEEKLY SPREAD: {} to {} ---", start, end);
    if view.is_empty() {
        println!("No entries found for this week.");
        return Ok(());
    }
    for entry in view {
        println!(
            "{} {} {}{} {}",
            entry.timestamp.format(DAY_HEADER_FORMAT),
            entry.timestamp.format(TIME_FORMAT),
            views::simple_symbol(entry, now.date()),
            entry.signifier.glyph().trim_end(),
            entry.content
        );
    }
    Ok(())
}

/// Prints the monthly spread for the given calendar month.
pub fn month(store: &Store, now: NaiveDateTime, year: i32, month: u32) -> AppResult<()> {
    let journal = load_journal(store, now)?;
    let view = views::monthly_view(journal.entries(), year, month);

    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => println!("--- MONTHLY SPREAD: {} ---", first.format("%B %Y")),
        None => return Err(AppError::Input(format!("Invalid month: {}-{}", year, month))),
    }
    if view.is_empty() {
        println!("No entries found for this month.");
        return Ok(());
    }
    for (day, entries) in &view {
        for (i, entry) in entries.iter().copied().enumerate() {
            let day_label = if i == 0 {
                format!("DAY {:02}", day)
            } else {
                "      ".to_string()
            };
            println!(
                "{} {} {}{} {}",
                day_label,
                entry.timestamp.format(TIME_FORMAT),
                views::simple_symbol(entry, now.date()),
                entry.signifier.glyph().trim_end(),
                entry.content
            );
        }
    }
    Ok(())
}

/// Prints the 7-day habit tracker ending at `reference`.
pub fn habits(store: &Store, now: NaiveDateTime, reference: NaiveDate) -> AppResult<()> {
    let journal = load_journal(store, now)?;
    let grid = views::habit_grid(journal.entries(), reference);

    println!("--- HABIT TRACKER ---");
    if grid.rows.is_empty() {
        println!("No habit entries found.");
        return Ok(());
    }

    let name_width = grid
        .rows
        .iter()
        .map(|row| row.habit.content.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let header: Vec<String> = grid
        .dates
        .iter()
        .map(|d| d.format(DAY_HEADER_FORMAT).to_string())
        .collect();
    println!("{:<width$} | {}", "Habit", header.join(" | "), width = name_width);

    for row in &grid.rows {
        let cells: Vec<String> = row
            .completions
            .iter()
            .map(|done| format!("{:^6}", if *done { "+" } else { " " }))
            .collect();
        println!(
            "{:<width$} | {}",
            row.habit.content,
            cells.join(" | "),
            width = name_width
        );
    }
    Ok(())
}

/// Loads the journal, seeding instructional sample entries when the store
/// comes back empty (first run or a reset snapshot).
fn load_journal(store: &Store, now: NaiveDateTime) -> AppResult<Journal> {
    let entries = store.load_all(now);
    if !entries.is_empty() {
        return Ok(Journal::from_entries(entries));
    }

    let journal = Journal::from_entries(sample_entries(now));
    store.save_all(journal.entries())?;
    info!("seeded sample entries for a fresh journal");
    Ok(journal)
}

fn mutate<F>(
    store: &Store,
    now: NaiveDateTime,
    index: usize,
    done_message: &str,
    apply: F,
) -> AppResult<()>
where
    F: FnOnce(&mut Entry) -> Result<(), EntryError>,
{
    let mut journal = load_journal(store, now)?;
    let entry = journal.get_display_mut(index)?;
    apply(entry)?;
    let content = entry.content.clone();
    store.save_all(journal.entries())?;
    println!("'{}' {}.", content, done_message);
    Ok(())
}

fn parse_signifier(raw: Option<&str>) -> AppResult<Signifier> {
    match raw {
        None => Ok(Signifier::None),
        Some(value) => Signifier::from_glyph(value).ok_or_else(|| {
            AppError::Input(format!("Unknown signifier '{}'; use *, ! or ?", value))
        }),
    }
}

/// Instructional placeholder entries for a new journal.
fn sample_entries(now: NaiveDateTime) -> Vec<Entry> {
    let yesterday = now - Duration::days(1);
    vec![
        Entry::note(
            "Welcome to your bullet journal! Run `rapidlog add` to log an entry.".to_string(),
            Signifier::Inspiration,
            now,
        ),
        Entry::task(
            "Task: run `rapidlog complete <index>` or `rapidlog migrate <index>` on me.".to_string(),
            Signifier::Priority,
            now,
        ),
        Entry::event(
            "Event: run `rapidlog event-done <index>` to mark me complete.".to_string(),
            Signifier::None,
            Some("Demo Location".to_string()),
            now,
        ),
        Entry::habit(
            "Habit: run `rapidlog habit-done <index>` to check me off for today.".to_string(),
            Signifier::None,
            DEFAULT_HABIT_FREQUENCY.to_string(),
            yesterday,
        ),
        Entry::note(
            "Run `rapidlog week`, `rapidlog month` or `rapidlog habits` for the spreads."
                .to_string(),
            Signifier::Explore,
            yesterday - Duration::hours(1),
        ),
    ]
}

fn format_entry(entry: &Entry, index: usize, today: NaiveDate) -> String {
    let mut content = entry.content.clone();
    if let Kind::Event {
        location: Some(location),
        ..
    } = entry.kind()
    {
        content.push_str(&format!(" @ {}", location));
    }

    format!(
        "[{:02}] {} {} {}{} {} ({})",
        index,
        entry.timestamp.date(),
        entry.timestamp.format(TIME_FORMAT),
        views::simple_symbol(entry, today),
        entry.signifier.glyph().trim_end(),
        content,
        entry.entry_type()
    )
}
