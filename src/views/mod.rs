//! Read-only projections over the entry collection.
//!
//! Everything in this module is pure: views borrow the entries, sort copies
//! of the references, and never mutate the source collection. "Today" and
//! the reference date are always parameters, never read from the clock, so
//! the same inputs always produce the same spread.

use crate::constants::HABIT_GRID_DAYS;
use crate::journal::{Entry, Kind};
use chrono::{Datelike, Days, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Entries whose date falls in the Monday-start week containing `reference`,
/// ascending by timestamp.
///
/// # Examples
///
/// ```
/// use rapidlog::journal::{Entry, Signifier};
/// use rapidlog::views::weekly_view;
/// use chrono::NaiveDate;
///
/// // 2024-01-17 is a Wednesday; its week runs Mon 15 to Sun 21.
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let entries = vec![Entry::note(
///     "In week".into(),
///     Signifier::None,
///     monday.and_hms_opt(9, 0, 0).unwrap(),
/// )];
/// assert_eq!(weekly_view(&entries, wednesday).len(), 1);
/// ```
pub fn weekly_view<'a>(entries: &'a [Entry], reference: NaiveDate) -> Vec<&'a Entry> {
    let (start, end) = week_window(reference);
    entries_in_range(entries, start, end)
}

/// The Monday-start 7-day window `[monday, sunday]` containing `reference`.
pub fn week_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// Entries in the given calendar month, grouped by day-of-month.
///
/// The map iterates in day order; each group keeps ascending intra-day
/// order. An invalid year/month yields an empty map.
pub fn monthly_view<'a>(
    entries: &'a [Entry],
    year: i32,
    month: u32,
) -> BTreeMap<u32, Vec<&'a Entry>> {
    let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return BTreeMap::new();
    };
    let end = month_end(start);

    let mut grouped: BTreeMap<u32, Vec<&Entry>> = BTreeMap::new();
    for entry in entries_in_range(entries, start, end) {
        grouped.entry(entry.timestamp.day()).or_default().push(entry);
    }
    grouped
}

/// One habit's completion cells for the habit tracker grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitRow<'a> {
    /// The habit entry the row describes.
    pub habit: &'a Entry,
    /// One cell per grid date, aligned with [`HabitGrid::dates`].
    pub completions: Vec<bool>,
}

/// The 7-day habit tracker spread.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitGrid<'a> {
    /// The 7 calendar dates ending at the reference date, oldest first.
    pub dates: Vec<NaiveDate>,
    /// One row per habit entry, in collection order.
    pub rows: Vec<HabitRow<'a>>,
}

/// Builds the habit tracker grid for the 7 dates ending at `reference`.
///
/// Non-habit entries are ignored; an entry collection without habits yields
/// a grid with dates but no rows.
pub fn habit_grid<'a>(entries: &'a [Entry], reference: NaiveDate) -> HabitGrid<'a> {
    let dates: Vec<NaiveDate> = (0..HABIT_GRID_DAYS)
        .rev()
        .filter_map(|offset| reference.checked_sub_days(Days::new(offset)))
        .collect();

    let rows = entries
        .iter()
        .filter_map(|entry| match entry.kind() {
            Kind::Habit {
                completed_dates, ..
            } => Some(HabitRow {
                habit: entry,
                completions: dates.iter().map(|d| completed_dates.contains(d)).collect(),
            }),
            _ => None,
        })
        .collect();

    HabitGrid { dates, rows }
}

/// The one-glyph display symbol for an entry.
///
/// Used uniformly by every view and the CLI listing so visual semantics
/// never diverge: a task shows its status glyph, an event `✓`/`○` by
/// completion, a habit `✓`/`◷` by whether it was done on `today`, and a
/// note a fixed dash.
pub fn simple_symbol(entry: &Entry, today: NaiveDate) -> &'static str {
    match entry.kind() {
        Kind::Note => "−",
        Kind::Task { status } => status.glyph(),
        Kind::Event { completed, .. } => {
            if *completed {
                "✓"
            } else {
                "○"
            }
        }
        Kind::Habit {
            completed_dates, ..
        } => {
            if completed_dates.contains(&today) {
                "✓"
            } else {
                "◷"
            }
        }
    }
}

fn entries_in_range<'a>(
    entries: &'a [Entry],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Entry> {
    let mut hits: Vec<&Entry> = entries
        .iter()
        .filter(|entry| {
            let date = entry.timestamp.date();
            start <= date && date <= end
        })
        .collect();
    hits.sort_by_key(|entry| entry.timestamp);
    hits
}

fn month_end(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}
