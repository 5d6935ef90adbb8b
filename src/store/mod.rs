//! The on-disk snapshot store.
//!
//! A `Store` owns the path to the single snapshot file holding the whole
//! entry collection. Loads are degrading: a missing, unreadable, or corrupt
//! snapshot yields an empty collection after a warning, so a damaged file
//! never takes the journal down. Saves rewrite the snapshot wholesale and go
//! through a temp-file-then-rename so a crash mid-write leaves the previous
//! snapshot intact; save failures always propagate.

use crate::codec;
use crate::errors::StoreError;
use crate::journal::Entry;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Handle to the journal snapshot file.
///
/// Constructed once at startup from the configuration and passed down
/// explicitly; there is no ambient global store.
///
/// # Examples
///
/// ```no_run
/// use rapidlog::{Config, Store};
/// use chrono::Local;
///
/// let config = Config::load().expect("Failed to load config");
/// let store = Store::new(config.journal_file());
/// let entries = store.load_all(Local::now().naive_local());
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store over the given snapshot path.
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    /// The snapshot path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole persisted collection.
    ///
    /// `now` is the fallback instant substituted for records with a missing
    /// or malformed timestamp.
    ///
    /// Never fails: a missing file, an unreadable file, and a structurally
    /// corrupt snapshot all degrade to an empty collection after emitting a
    /// warning. Corruption is treated as "start fresh".
    pub fn load_all(&self, now: NaiveDateTime) -> Vec<Entry> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no journal snapshot yet, starting empty");
                return Vec::new();
            }
            Err(err) => {
                let unreadable = StoreError::ReadFailed {
                    path: self.path.clone(),
                    source: err,
                };
                warn!(error = %unreadable, "journal snapshot unreadable, starting empty");
                return Vec::new();
            }
        };

        if data.trim().is_empty() {
            return Vec::new();
        }

        match codec::decode_entries(&data, now) {
            Ok(entries) => {
                debug!(count = entries.len(), "journal snapshot loaded");
                entries
            }
            Err(err) => {
                warn!(
                    error = %err,
                    path = %self.path.display(),
                    "journal snapshot is corrupt, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Writes the full collection, replacing the previous snapshot.
    ///
    /// The collection is treated as a single transactional unit: the encoded
    /// snapshot is written to a temporary file in the target directory and
    /// then renamed over the snapshot path. The parent directory is created
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or any filesystem step fails;
    /// a lost write is never silent.
    pub fn save_all(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let payload = codec::encode_entries(entries)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_journal_directory_exists(dir).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tmp.write_all(payload.as_bytes())
            .map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        tmp.persist(&self.path)
            .map_err(|err| StoreError::WriteFailed {
                path: self.path.clone(),
                source: err.error,
            })?;

        debug!(count = entries.len(), path = %self.path.display(), "journal snapshot written");
        Ok(())
    }

    /// Loads the collection and keeps entries whose timestamp date lies in
    /// the inclusive range `[start, end]`.
    ///
    /// Linear scan over the whole snapshot; no indexing at this data scale.
    pub fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        now: NaiveDateTime,
    ) -> Vec<Entry> {
        self.load_all(now)
            .into_iter()
            .filter(|entry| {
                let date = entry.timestamp.date();
                start <= date && date <= end
            })
            .collect()
    }
}

/// Ensures the journal directory exists, creating it if necessary.
///
/// On unix the directory is created with owner-only permissions.
fn ensure_journal_directory_exists(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_DIR_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
        fs::set_permissions(dir, permissions)?;
        debug!("set owner-only permissions on journal directory");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{Entry, Signifier};
    use tempfile::tempdir;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_load_all_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("journal.json"));
        assert!(store.load_all(fixed_now()).is_empty());
    }

    #[test]
    fn test_load_all_empty_file_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "  \n").unwrap();
        let store = Store::new(path);
        assert!(store.load_all(fixed_now()).is_empty());
    }

    #[test]
    fn test_load_all_corrupt_file_returns_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{ this is not a journal").unwrap();
        let store = Store::new(path);
        assert!(store.load_all(fixed_now()).is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("journal.json"));

        let entries = vec![
            Entry::note("first".into(), Signifier::Explore, fixed_now()),
            Entry::task("second".into(), Signifier::Priority, fixed_now()),
        ];
        store.save_all(&entries).unwrap();

        let loaded = store.load_all(fixed_now());
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("journal.json"));
        store
            .save_all(&[Entry::note("n".into(), Signifier::None, fixed_now())])
            .unwrap();
        assert_eq!(store.load_all(fixed_now()).len(), 1);
    }

    #[test]
    fn test_save_replaces_previous_snapshot_wholesale() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("journal.json"));

        store
            .save_all(&[
                Entry::note("a".into(), Signifier::None, fixed_now()),
                Entry::note("b".into(), Signifier::None, fixed_now()),
            ])
            .unwrap();
        store
            .save_all(&[Entry::note("only".into(), Signifier::None, fixed_now())])
            .unwrap();

        let loaded = store.load_all(fixed_now());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "only");
    }

    #[test]
    fn test_save_to_unwritable_path_propagates() {
        let dir = tempdir().unwrap();
        // a directory where the snapshot file should be
        let path = dir.path().join("journal.json");
        fs::create_dir(&path).unwrap();
        let store = Store::new(path);
        let result = store.save_all(&[Entry::note("n".into(), Signifier::None, fixed_now())]);
        assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
    }

    #[test]
    fn test_find_by_date_range_is_inclusive() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("journal.json"));

        let day = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 1, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        };
        store
            .save_all(&[
                Entry::note("before".into(), Signifier::None, day(4)),
                Entry::note("start".into(), Signifier::None, day(5)),
                Entry::note("end".into(), Signifier::None, day(10)),
                Entry::note("after".into(), Signifier::None, day(11)),
            ])
            .unwrap();

        let found = store.find_by_date_range(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            fixed_now(),
        );
        let contents: Vec<&str> = found.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["start", "end"]);
    }
}
