//! Lossless mapping between the entry collection and the snapshot text.
//!
//! The persisted form is an ordered JSON array of tagged records. Each record
//! carries the `kind` tag plus every field of its variant; enums are written
//! as their short values (glyphs), timestamps as fixed, sortable,
//! timezone-naive strings, and a habit's completed dates as `YYYY-MM-DD`
//! strings, newest first.
//!
//! Decoding is deliberately forgiving. A record with an unknown signifier or
//! status gets the safe default substituted; an absent or malformed timestamp
//! falls back to a caller-supplied instant; fields a variant does not
//! recognize are ignored. Only a record that cannot be decoded at all (not
//! an object, missing its tag or content, unknown kind) is skipped, and
//! decoding of the remaining collection always continues.

use crate::constants::{DATE_FORMAT_ISO, TIMESTAMP_FORMAT, TIMESTAMP_FORMAT_LENIENT};
use crate::errors::DecodeError;
use crate::journal::{Entry, EntryType, Kind, Signifier, TaskStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// The flat wire form of one entry record.
///
/// Variant fields are optional so a single shape covers every kind; encode
/// fills only the fields the variant owns, and decode ignores the rest.
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    kind: String,
    content: String,
    #[serde(default)]
    signifier: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_dates: Option<Vec<String>>,
}

/// Encodes the collection as pretty-printed snapshot text.
///
/// Record order follows the slice (insertion) order; display sorting is a
/// derived view and is never persisted.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn encode_entries(entries: &[Entry]) -> Result<String, serde_json::Error> {
    let records: Vec<EntryRecord> = entries.iter().map(to_record).collect();
    serde_json::to_string_pretty(&records)
}

/// Decodes snapshot text into an entry collection.
///
/// `fallback_timestamp` is substituted for any record whose timestamp is
/// absent or malformed; callers pass the session's "now".
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] only when the snapshot as a whole is
/// not a JSON array. Individual undecodable records are skipped with a
/// warning and never abort the rest of the collection.
pub fn decode_entries(
    data: &str,
    fallback_timestamp: NaiveDateTime,
) -> Result<Vec<Entry>, DecodeError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(data)?;
    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        match decode_record(value, fallback_timestamp) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(error = %err, "skipping undecodable journal record"),
        }
    }
    Ok(entries)
}

fn to_record(entry: &Entry) -> EntryRecord {
    let mut record = EntryRecord {
        kind: entry.entry_type().as_str().to_string(),
        content: entry.content.clone(),
        signifier: Some(entry.signifier.glyph().to_string()),
        timestamp: Some(entry.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        status: None,
        location: None,
        completed: None,
        frequency: None,
        completed_dates: None,
    };

    match entry.kind() {
        Kind::Note => {}
        Kind::Task { status } => {
            record.status = Some(status.glyph().to_string());
        }
        Kind::Event {
            location,
            completed,
        } => {
            record.location = location.clone();
            record.completed = Some(*completed);
        }
        Kind::Habit {
            frequency,
            completed_dates,
        } => {
            record.frequency = Some(frequency.clone());
            // newest first by convention; ordering carries no meaning
            record.completed_dates = Some(
                completed_dates
                    .iter()
                    .rev()
                    .map(|d| d.format(DATE_FORMAT_ISO).to_string())
                    .collect(),
            );
        }
    }

    record
}

fn decode_record(
    value: serde_json::Value,
    fallback_timestamp: NaiveDateTime,
) -> Result<Entry, DecodeError> {
    let record: EntryRecord = serde_json::from_value(value)?;

    let entry_type = EntryType::parse(&record.kind)
        .ok_or_else(|| DecodeError::UnknownKind(record.kind.clone()))?;

    let signifier = match record.signifier.as_deref() {
        Some(raw) => Signifier::from_glyph(raw).unwrap_or_else(|| {
            warn!(value = raw, "unknown signifier value, defaulting to none");
            Signifier::None
        }),
        None => Signifier::None,
    };

    let timestamp = match record.timestamp.as_deref() {
        Some(raw) => decode_timestamp(raw).unwrap_or_else(|| {
            warn!(value = raw, "malformed timestamp, defaulting to current time");
            fallback_timestamp
        }),
        None => fallback_timestamp,
    };

    let kind = match entry_type {
        EntryType::Note => Kind::Note,
        EntryType::Task => {
            let status = match record.status.as_deref() {
                Some(raw) => TaskStatus::from_glyph(raw).unwrap_or_else(|| {
                    warn!(value = raw, "unknown task status, defaulting to incomplete");
                    TaskStatus::default()
                }),
                None => TaskStatus::default(),
            };
            Kind::Task { status }
        }
        EntryType::Event => Kind::Event {
            location: record.location,
            completed: record.completed.unwrap_or(false),
        },
        EntryType::Habit => Kind::Habit {
            frequency: record
                .frequency
                .unwrap_or_else(|| crate::constants::DEFAULT_HABIT_FREQUENCY.to_string()),
            completed_dates: decode_completed_dates(record.completed_dates),
        },
    };

    Ok(Entry::new(record.content, signifier, timestamp, kind))
}

fn decode_timestamp(raw: &str) -> Option<NaiveDateTime> {
    // The lenient format tolerates the fractional seconds older snapshots carry.
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT_LENIENT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT))
        .ok()
}

fn decode_completed_dates(raw: Option<Vec<String>>) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for value in raw.unwrap_or_default() {
        match NaiveDate::parse_from_str(&value, DATE_FORMAT_ISO) {
            Ok(date) => {
                dates.insert(date);
            }
            Err(_) => warn!(value = %value, "dropping malformed habit completion date"),
        }
    }
    dates
}
