//! The entry data model and its state-transition rules.
//!
//! This module contains the pure, I/O-free core of the journal: the entry
//! variants (note, task, event, habit), their legal state transitions, and
//! the `Journal` collection that owns the in-memory entry list for a running
//! session. Nothing here reads the clock or touches the filesystem;
//! timestamps and "today" are always supplied by the caller so tests can use
//! fixed dates.

use crate::errors::EntryError;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::fmt;

/// An annotation glyph marking the importance or category of an entry.
///
/// Signifiers are purely descriptive; they carry no behavior. Each one has a
/// fixed one-character short value used for both display and persistence.
///
/// # Examples
///
/// ```
/// use rapidlog::journal::Signifier;
///
/// assert_eq!(Signifier::Priority.glyph(), "*");
/// assert_eq!(Signifier::from_glyph("!"), Some(Signifier::Inspiration));
/// assert_eq!(Signifier::from_glyph("%"), None);
/// assert_eq!(Signifier::default(), Signifier::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signifier {
    /// `*`: something that must get done.
    Priority,
    /// `!`: an idea worth keeping.
    Inspiration,
    /// `?`: something to look into later.
    Explore,
    /// ` `: no annotation.
    #[default]
    None,
}

impl Signifier {
    /// The short value used for display and in the persisted snapshot.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Signifier::Priority => "*",
            Signifier::Inspiration => "!",
            Signifier::Explore => "?",
            Signifier::None => " ",
        }
    }

    /// Reconstructs a signifier from its short value.
    ///
    /// The empty string is accepted as `None` so that callers trimming user
    /// input do not have to special-case it. Unknown values return `Option::None`;
    /// the codec substitutes the default instead of failing the load.
    pub fn from_glyph(raw: &str) -> Option<Self> {
        match raw {
            "*" => Some(Signifier::Priority),
            "!" => Some(Signifier::Inspiration),
            "?" => Some(Signifier::Explore),
            " " | "" => Some(Signifier::None),
            _ => None,
        }
    }
}

/// The lifecycle state of a task entry.
///
/// A task starts `Incomplete` and only changes through the explicit
/// transition operations on [`Entry`]; nothing resets it on re-display or
/// reload. Each state carries a fixed display glyph that doubles as its
/// persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// `•`: logged but not yet done.
    #[default]
    Incomplete,
    /// `×`: done.
    Complete,
    /// `>`: moved forward to another day or collection.
    Migrated,
    /// `<`: scheduled into the future log.
    Scheduled,
    /// `~`: no longer worth doing.
    Irrelevant,
}

impl TaskStatus {
    /// The glyph used for display and in the persisted snapshot.
    pub const fn glyph(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "•",
            TaskStatus::Complete => "×",
            TaskStatus::Migrated => ">",
            TaskStatus::Scheduled => "<",
            TaskStatus::Irrelevant => "~",
        }
    }

    /// Reconstructs a status from its glyph; unknown values return `None`.
    pub fn from_glyph(raw: &str) -> Option<Self> {
        match raw {
            "•" => Some(TaskStatus::Incomplete),
            "×" => Some(TaskStatus::Complete),
            ">" => Some(TaskStatus::Migrated),
            "<" => Some(TaskStatus::Scheduled),
            "~" => Some(TaskStatus::Irrelevant),
            _ => None,
        }
    }
}

/// A lightweight tag naming an entry's variant.
///
/// Used for persistence tagging, error payloads, and display grouping. The
/// tag always matches the entry's payload: it is derived from the variant,
/// never stored separately, so it cannot be reassigned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Note,
    Task,
    Event,
    Habit,
}

impl EntryType {
    /// The tag string written to the snapshot and shown in listings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntryType::Note => "Note",
            EntryType::Task => "Task",
            EntryType::Event => "Event",
            EntryType::Habit => "Habit",
        }
    }

    /// Parses a persisted kind tag. Unknown tags return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Note" => Some(EntryType::Note),
            "Task" => Some(EntryType::Task),
            "Event" => Some(EntryType::Event),
            "Habit" => Some(EntryType::Habit),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The variant-specific payload of an entry, a closed tagged union.
///
/// Every consumer (codec, view builder, the operations below) pattern-matches
/// on this enum, so adding a variant is a compile-time-checked exhaustiveness
/// exercise rather than an open-ended subtype check.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A plain note; no extra state.
    Note,
    /// A task with a lifecycle status.
    Task {
        /// Current status; starts `Incomplete`.
        status: TaskStatus,
    },
    /// An event that can be attended.
    Event {
        /// Optional venue text.
        location: Option<String>,
        /// Whether the event was completed.
        completed: bool,
    },
    /// A recurring habit tracked per calendar day.
    Habit {
        /// Free-form frequency label, e.g. "Daily".
        frequency: String,
        /// Days the habit was done. Each date appears at most once;
        /// ordering carries no meaning.
        completed_dates: BTreeSet<NaiveDate>,
    },
}

impl Kind {
    /// The tag naming this payload's variant.
    pub const fn entry_type(&self) -> EntryType {
        match self {
            Kind::Note => EntryType::Note,
            Kind::Task { .. } => EntryType::Task,
            Kind::Event { .. } => EntryType::Event,
            Kind::Habit { .. } => EntryType::Habit,
        }
    }
}

/// One logged item of a fixed variant.
///
/// Every entry carries content text, a [`Signifier`], a creation timestamp,
/// and exactly one [`Kind`] payload. The payload field is private: state only
/// changes through the transition operations below, which either fully
/// succeed or leave the entry untouched.
///
/// Timestamps are explicit constructor parameters: the caller supplies
/// "now" (the CLI obtains it once at startup), so the model itself never
/// reads the wall clock.
///
/// # Examples
///
/// ```
/// use rapidlog::journal::{Entry, Signifier, TaskStatus, Kind};
/// use chrono::NaiveDate;
///
/// let noon = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let mut task = Entry::task("Buy milk".to_string(), Signifier::Priority, noon);
///
/// task.complete_task().unwrap();
/// assert_eq!(task.kind(), &Kind::Task { status: TaskStatus::Complete });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The logged text. Non-empty by convention; the presentation layer
    /// rejects empty content before construction.
    pub content: String,
    /// Importance/category annotation.
    pub signifier: Signifier,
    /// Creation instant; nothing in the model mutates it.
    pub timestamp: NaiveDateTime,
    kind: Kind,
}

impl Entry {
    /// Creates an entry from its parts.
    pub fn new(
        content: String,
        signifier: Signifier,
        timestamp: NaiveDateTime,
        kind: Kind,
    ) -> Self {
        Entry {
            content,
            signifier,
            timestamp,
            kind,
        }
    }

    /// Creates a note.
    pub fn note(content: String, signifier: Signifier, timestamp: NaiveDateTime) -> Self {
        Entry::new(content, signifier, timestamp, Kind::Note)
    }

    /// Creates a task in the initial `Incomplete` status.
    pub fn task(content: String, signifier: Signifier, timestamp: NaiveDateTime) -> Self {
        Entry::new(
            content,
            signifier,
            timestamp,
            Kind::Task {
                status: TaskStatus::default(),
            },
        )
    }

    /// Creates an event, not yet completed.
    pub fn event(
        content: String,
        signifier: Signifier,
        location: Option<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Entry::new(
            content,
            signifier,
            timestamp,
            Kind::Event {
                location,
                completed: false,
            },
        )
    }

    /// Creates a habit with no completions yet.
    pub fn habit(
        content: String,
        signifier: Signifier,
        frequency: String,
        timestamp: NaiveDateTime,
    ) -> Self {
        Entry::new(
            content,
            signifier,
            timestamp,
            Kind::Habit {
                frequency,
                completed_dates: BTreeSet::new(),
            },
        )
    }

    /// The variant-specific payload.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The tag naming this entry's variant.
    pub fn entry_type(&self) -> EntryType {
        self.kind.entry_type()
    }

    /// Marks a task complete.
    ///
    /// Idempotent: completing an already-complete task is a no-op, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a task; the
    /// entry is left unchanged.
    pub fn complete_task(&mut self) -> Result<(), EntryError> {
        match &mut self.kind {
            Kind::Task { status } => {
                *status = TaskStatus::Complete;
                Ok(())
            }
            other => Err(EntryError::WrongKind {
                expected: EntryType::Task,
                actual: other.entry_type(),
            }),
        }
    }

    /// Marks a task migrated.
    ///
    /// There is no restriction on the prior status: a complete task can be
    /// migrated, which records where the work went rather than whether it
    /// was done.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a task.
    pub fn migrate_task(&mut self) -> Result<(), EntryError> {
        match &mut self.kind {
            Kind::Task { status } => {
                *status = TaskStatus::Migrated;
                Ok(())
            }
            other => Err(EntryError::WrongKind {
                expected: EntryType::Task,
                actual: other.entry_type(),
            }),
        }
    }

    /// Marks an event completed.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not an event.
    pub fn complete_event(&mut self) -> Result<(), EntryError> {
        match &mut self.kind {
            Kind::Event { completed, .. } => {
                *completed = true;
                Ok(())
            }
            other => Err(EntryError::WrongKind {
                expected: EntryType::Event,
                actual: other.entry_type(),
            }),
        }
    }

    /// Records a habit as done on `day`.
    ///
    /// Insertion is idempotent: marking the same day twice yields the same
    /// state as marking it once.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a habit.
    pub fn mark_habit_complete(&mut self, day: NaiveDate) -> Result<(), EntryError> {
        match &mut self.kind {
            Kind::Habit {
                completed_dates, ..
            } => {
                completed_dates.insert(day);
                Ok(())
            }
            other => Err(EntryError::WrongKind {
                expected: EntryType::Habit,
                actual: other.entry_type(),
            }),
        }
    }

    /// Whether the habit was done on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a habit.
    pub fn is_habit_completed_on(&self, day: NaiveDate) -> Result<bool, EntryError> {
        self.habit_dates().map(|dates| dates.contains(&day))
    }

    /// Counts consecutive completed days ending at `today`.
    ///
    /// Starts at `today`: if it is absent the streak is 0, no credit for a
    /// run that does not include the most recent day. If present, the streak
    /// is 1 plus one per consecutive prior day, stopping at the first gap.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a habit.
    ///
    /// # Examples
    ///
    /// ```
    /// use rapidlog::journal::{Entry, Signifier};
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let noon = today.and_hms_opt(12, 0, 0).unwrap();
    /// let mut habit = Entry::habit("Stretch".into(), Signifier::None, "Daily".into(), noon);
    ///
    /// habit.mark_habit_complete(today - Duration::days(1)).unwrap();
    /// assert_eq!(habit.habit_streak(today).unwrap(), 0);
    ///
    /// habit.mark_habit_complete(today).unwrap();
    /// assert_eq!(habit.habit_streak(today).unwrap(), 2);
    /// ```
    pub fn habit_streak(&self, today: NaiveDate) -> Result<u32, EntryError> {
        let dates = self.habit_dates()?;
        let mut streak = 0;
        let mut day = today;
        while dates.contains(&day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        Ok(streak)
    }

    /// Counts completed dates within the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::WrongKind`] if the entry is not a habit.
    pub fn habit_completion_count(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<usize, EntryError> {
        let dates = self.habit_dates()?;
        if start > end {
            return Ok(0);
        }
        Ok(dates.range(start..=end).count())
    }

    fn habit_dates(&self) -> Result<&BTreeSet<NaiveDate>, EntryError> {
        match &self.kind {
            Kind::Habit {
                completed_dates, ..
            } => Ok(completed_dates),
            other => Err(EntryError::WrongKind {
                expected: EntryType::Habit,
                actual: other.entry_type(),
            }),
        }
    }
}

/// The ordered entry collection owned by a running session.
///
/// Storage order is insertion order. Display order (timestamp descending)
/// is derived on every read and never persisted, so the indexes shown in a
/// listing are resolved against that derived order. Indexes are 1-based, as
/// displayed. No entry is ever deleted; entries persist for the life of the
/// journal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Journal::default()
    }

    /// Wraps an existing entry list, preserving its order as insertion order.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Journal { entries }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion (storage) order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consumes the journal, yielding the entries in insertion order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// The entries sorted newest-first, as shown in listings.
    ///
    /// Entries with equal timestamps keep their insertion order (stable
    /// sort), so indexes are deterministic.
    pub fn display(&self) -> Vec<&Entry> {
        self.display_order()
            .into_iter()
            .map(|i| &self.entries[i])
            .collect()
    }

    /// Resolves a 1-based display index to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::NotFound`] if the index is 0 or past the end.
    pub fn get_display(&self, index: usize) -> Result<&Entry, EntryError> {
        let order = self.display_order();
        let slot = index
            .checked_sub(1)
            .and_then(|i| order.get(i).copied())
            .ok_or(EntryError::NotFound { index })?;
        Ok(&self.entries[slot])
    }

    /// Resolves a 1-based display index to its entry, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::NotFound`] if the index is 0 or past the end.
    pub fn get_display_mut(&mut self, index: usize) -> Result<&mut Entry, EntryError> {
        let order = self.display_order();
        let slot = index
            .checked_sub(1)
            .and_then(|i| order.get(i).copied())
            .ok_or(EntryError::NotFound { index })?;
        Ok(&mut self.entries[slot])
    }

    fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].timestamp.cmp(&self.entries[a].timestamp));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_signifier_glyph_round_trip() {
        for signifier in [
            Signifier::Priority,
            Signifier::Inspiration,
            Signifier::Explore,
            Signifier::None,
        ] {
            assert_eq!(Signifier::from_glyph(signifier.glyph()), Some(signifier));
        }
        assert_eq!(Signifier::from_glyph(""), Some(Signifier::None));
        assert_eq!(Signifier::from_glyph("%"), None);
    }

    #[test]
    fn test_task_status_glyph_round_trip() {
        for status in [
            TaskStatus::Incomplete,
            TaskStatus::Complete,
            TaskStatus::Migrated,
            TaskStatus::Scheduled,
            TaskStatus::Irrelevant,
        ] {
            assert_eq!(TaskStatus::from_glyph(status.glyph()), Some(status));
        }
        assert_eq!(TaskStatus::from_glyph("x"), None);
    }

    #[test]
    fn test_entry_type_parse() {
        assert_eq!(EntryType::parse("Task"), Some(EntryType::Task));
        assert_eq!(EntryType::parse("task"), None);
        assert_eq!(EntryType::parse("Widget"), None);
    }

    #[test]
    fn test_complete_task_is_idempotent() {
        let mut task = Entry::task("Buy milk".into(), Signifier::Priority, noon(2024, 1, 15));
        task.complete_task().unwrap();
        let after_first = task.clone();
        task.complete_task().unwrap();
        assert_eq!(task, after_first);
        assert_eq!(
            task.kind(),
            &Kind::Task {
                status: TaskStatus::Complete
            }
        );
    }

    #[test]
    fn test_migrate_task_allows_any_prior_status() {
        let mut task = Entry::task("Plan trip".into(), Signifier::None, noon(2024, 1, 15));
        task.complete_task().unwrap();
        task.migrate_task().unwrap();
        assert_eq!(
            task.kind(),
            &Kind::Task {
                status: TaskStatus::Migrated
            }
        );
    }

    #[test]
    fn test_complete_task_on_note_rejects_without_mutation() {
        let mut note = Entry::note("Just a note".into(), Signifier::None, noon(2024, 1, 15));
        let before = note.clone();
        let result = note.complete_task();
        assert_eq!(
            result,
            Err(EntryError::WrongKind {
                expected: EntryType::Task,
                actual: EntryType::Note,
            })
        );
        assert_eq!(note, before);
    }

    #[test]
    fn test_complete_event() {
        let mut event = Entry::event(
            "Standup".into(),
            Signifier::None,
            Some("Room 4".into()),
            noon(2024, 1, 15),
        );
        event.complete_event().unwrap();
        match event.kind() {
            Kind::Event {
                location,
                completed,
            } => {
                assert_eq!(location.as_deref(), Some("Room 4"));
                assert!(*completed);
            }
            other => panic!("expected event, got {:?}", other),
        }
    }

    #[test]
    fn test_mark_habit_complete_is_idempotent() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        habit.mark_habit_complete(today).unwrap();
        let after_first = habit.clone();
        habit.mark_habit_complete(today).unwrap();
        assert_eq!(habit, after_first);
        assert!(habit.is_habit_completed_on(today).unwrap());
    }

    #[test]
    fn test_habit_streak_three_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        for days_ago in 0..3 {
            habit
                .mark_habit_complete(today - Duration::days(days_ago))
                .unwrap();
        }
        assert_eq!(habit.habit_streak(today).unwrap(), 3);
    }

    #[test]
    fn test_habit_streak_zero_when_today_missing() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        habit
            .mark_habit_complete(today - Duration::days(1))
            .unwrap();
        assert_eq!(habit.habit_streak(today).unwrap(), 0);
    }

    #[test]
    fn test_habit_streak_zero_when_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        assert_eq!(habit.habit_streak(today).unwrap(), 0);
    }

    #[test]
    fn test_habit_streak_stops_at_first_gap() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        habit.mark_habit_complete(today).unwrap();
        habit
            .mark_habit_complete(today - Duration::days(1))
            .unwrap();
        // gap at today-2
        habit
            .mark_habit_complete(today - Duration::days(3))
            .unwrap();
        assert_eq!(habit.habit_streak(today).unwrap(), 2);
    }

    #[test]
    fn test_habit_completion_count_inclusive_range() {
        let mut habit = Entry::habit(
            "Stretch".into(),
            Signifier::None,
            "Daily".into(),
            noon(2024, 1, 15),
        );
        for day in [1, 5, 10, 15, 20] {
            habit
                .mark_habit_complete(NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
                .unwrap();
        }
        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(habit.habit_completion_count(start, end).unwrap(), 3);
    }

    #[test]
    fn test_habit_queries_reject_non_habit() {
        let note = Entry::note("note".into(), Signifier::None, noon(2024, 1, 15));
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(note.is_habit_completed_on(day).is_err());
        assert!(note.habit_streak(day).is_err());
        assert!(note.habit_completion_count(day, day).is_err());
    }

    #[test]
    fn test_journal_display_sorts_newest_first() {
        let mut journal = Journal::new();
        journal.push(Entry::note("old".into(), Signifier::None, noon(2024, 1, 1)));
        journal.push(Entry::note("new".into(), Signifier::None, noon(2024, 1, 3)));
        journal.push(Entry::note("mid".into(), Signifier::None, noon(2024, 1, 2)));

        let display: Vec<&str> = journal.display().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(display, vec!["new", "mid", "old"]);

        // storage order is untouched
        let stored: Vec<&str> = journal
            .entries()
            .iter()
            .map(|e| e.content.as_str())
            .collect();
        assert_eq!(stored, vec!["old", "new", "mid"]);
    }

    #[test]
    fn test_journal_index_resolution_follows_display_order() {
        let mut journal = Journal::new();
        journal.push(Entry::note("old".into(), Signifier::None, noon(2024, 1, 1)));
        journal.push(Entry::task("new".into(), Signifier::None, noon(2024, 1, 3)));

        assert_eq!(journal.get_display(1).unwrap().content, "new");
        assert_eq!(journal.get_display(2).unwrap().content, "old");

        journal.get_display_mut(1).unwrap().complete_task().unwrap();
        match journal.entries()[1].kind() {
            Kind::Task { status } => assert_eq!(*status, TaskStatus::Complete),
            other => panic!("expected task, got {:?}", other),
        }
    }

    #[test]
    fn test_journal_index_out_of_range() {
        let mut journal = Journal::new();
        journal.push(Entry::note("only".into(), Signifier::None, noon(2024, 1, 1)));

        assert_eq!(
            journal.get_display(0).unwrap_err(),
            EntryError::NotFound { index: 0 }
        );
        assert_eq!(
            journal.get_display(2).unwrap_err(),
            EntryError::NotFound { index: 2 }
        );
        assert!(journal.get_display_mut(5).is_err());
    }
}
