//! Configuration management for the rapidlog application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! journal directory; the snapshot file lives inside it under a fixed name.
//!
//! # Environment Variables
//!
//! - `RAPIDLOG_DIR`: Path to the journal directory (defaults to ~/Documents/rapidlog)
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_JOURNAL_SUBDIR, ENV_VAR_HOME, ENV_VAR_RAPIDLOG_DIR, JOURNAL_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the rapidlog application.
///
/// Holds the directory where the journal snapshot is stored. Loaded once at
/// startup; an explicit [`crate::Store`] handle is then built from it and
/// passed down; there is no ambient global.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use rapidlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
/// };
/// assert!(config.journal_file().ends_with("journal.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the journal snapshot is stored.
    ///
    /// This is loaded from the RAPIDLOG_DIR environment variable with a
    /// fallback to ~/Documents/rapidlog if not specified.
    pub journal_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal directory path is expanded with `shellexpand` to handle
    /// `~` and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let journal_dir_str = env::var(ENV_VAR_RAPIDLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        let expanded = shellexpand::full(&journal_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let journal_dir = PathBuf::from(expanded.into_owned());

        if journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        Ok(Config { journal_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the journal directory path is empty or
    /// not absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// The full path of the journal snapshot file.
    pub fn journal_file(&self) -> PathBuf {
        self.journal_dir.join(JOURNAL_FILE_NAME)
    }
}
