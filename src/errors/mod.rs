//! Error handling utilities for the rapidlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::journal::EntryType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents rejected entry operations.
///
/// Every mutation either fully succeeds or has no effect; when an operation
/// is rejected with one of these variants, the target entry and the
/// collection are left unchanged.
///
/// # Examples
///
/// ```
/// use rapidlog::errors::EntryError;
/// use rapidlog::journal::EntryType;
///
/// let error = EntryError::WrongKind {
///     expected: EntryType::Task,
///     actual: EntryType::Note,
/// };
/// assert!(format!("{}", error).contains("Note"));
/// assert!(format!("{}", error).contains("Task"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// The given display index does not resolve to an entry.
    #[error("No entry at index {index}. Run `rapidlog list` to see valid indexes.")]
    NotFound {
        /// The 1-based display index that was requested
        index: usize,
    },

    /// The operation was applied to an entry of the wrong kind.
    #[error("Entry is a {actual}, not a {expected}. The operation was not applied.")]
    WrongKind {
        /// The kind the operation requires
        expected: EntryType,
        /// The kind the entry actually has
        actual: EntryType,
    },
}

/// Represents a journal record (or snapshot) that could not be decoded.
///
/// Individual record failures are recovered locally by the codec: the
/// offending record is skipped or its fields defaulted, and decoding of the
/// remaining collection continues. Only a structurally corrupt snapshot
/// surfaces as an error, and the store then degrades to an empty collection.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The snapshot text is not a valid JSON array of records.
    #[error("Journal snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record carries a kind tag no variant matches.
    #[error("Unknown entry kind '{0}'")]
    UnknownKind(String),
}

/// Represents failures of the on-disk snapshot store.
///
/// Read failures are degraded to an empty collection by `Store::load_all`;
/// write failures always propagate, since silently losing a save must not
/// be hidden from the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file exists but could not be read.
    #[error("Journal file {path} could not be read: {source}. Check file permissions.")]
    ReadFailed {
        /// The snapshot path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The snapshot could not be written.
    #[error("Journal file {path} could not be written: {source}. Check permissions and free space.")]
    WriteFailed {
        /// The snapshot path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The collection could not be encoded for persistence.
    #[error("Failed to encode journal snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Represents all possible errors that can occur in the rapidlog application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use rapidlog::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use rapidlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to user-supplied input (bad index string, empty
    /// content, unparseable date argument).
    #[error("Invalid input: {0}")]
    Input(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected entry operations.
    ///
    /// This variant uses a dedicated EntryError type so the caller can tell
    /// an unresolved index apart from a kind mismatch.
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    /// Undecodable snapshot content.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Snapshot store failures.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;
