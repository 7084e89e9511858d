//! # Store Error Types
//!
//! Error types for record store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (tokio::fs)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path that failed                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LendingError::Store ← Reported as an internal failure                 │
//! │                                                                         │
//! │  MalformedRecord never leaves the store: the line is skipped and       │
//! │  logged, load() still succeeds.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use biblio_core::ValidationError;
use thiserror::Error;

/// Record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or replacing the store file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory can't be created
    /// - File permissions issue
    /// - Disk full while writing the temporary file
    /// - Path points at a directory
    #[error("Store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured store path can't hold a file.
    #[error("Invalid store path: '{}'", .0.display())]
    InvalidPath(PathBuf),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a line of the store file was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// The line did not split into exactly five fields.
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    /// A count field is not an integer.
    #[error("{field} is not an integer: '{value}'")]
    InvalidCount { field: &'static str, value: String },

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// The parsed record breaks a book invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] ValidationError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
