//! # Error Types
//!
//! Domain-specific error types for biblio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  biblio-core errors (this file)                                        │
//! │  ├── CoreError        - Lending rule violations on a single book       │
//! │  └── ValidationError  - Input / record validation failures             │
//! │                                                                         │
//! │  biblio-store errors (separate crate)                                  │
//! │  └── StoreError       - Durable store I/O failures                     │
//! │                                                                         │
//! │  biblio-lending errors (separate crate)                                │
//! │  └── LendingError     - What a caller of an operation sees             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → LendingError → tonic::Status      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Lending rule violations.
///
/// These are raised by the state transitions on [`crate::Book`] and leave the
/// record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Borrow attempted on a book with no available copies.
    ///
    /// ## When This Occurs
    /// ```text
    /// Borrow "Designing Data" (total=3, borrowed=3)
    ///      │
    ///      ▼
    /// available = 0  →  NoCopiesAvailable
    ///      │
    ///      ▼
    /// borrowed stays 3
    /// ```
    #[error("No copies of '{title}' ({isbn}) are available")]
    NoCopiesAvailable { isbn: String, title: String },

    /// Return attempted on a book with no copies on loan.
    #[error("No loans of {isbn} are registered (available {available})")]
    NothingToReturn { isbn: String, available: i64 },

    /// Due date fell outside the representable calendar.
    #[error("Due date out of range for {0}")]
    DateOutOfRange(chrono::NaiveDate),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input and record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Count must not be negative.
    #[error("{field} cannot be negative: {value}")]
    Negative { field: String, value: i64 },

    /// More copies on loan than the library owns.
    #[error("borrowed ({borrowed}) cannot exceed total ({total})")]
    BorrowedExceedsTotal { borrowed: i64, total: i64 },

    /// Invalid format (e.g. delimiter inside a text field, non ISBN-13).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
