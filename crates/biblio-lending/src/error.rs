//! # Lending Error Types
//!
//! Every failed operation carries a [`LendingStatus`] category and a fixed,
//! human-readable message (its `Display`).
//!
//! ## Categories
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────────────────┐
//! │ LendingStatus    │ Variants                                             │
//! ├──────────────────┼──────────────────────────────────────────────────────┤
//! │ InvalidInput     │ EmptyIsbn, EmptyTitle                                │
//! │ NotFound         │ IsbnNotFound, TitleNotFound                          │
//! │ NoCapacity       │ NoCapacity                                           │
//! │ NothingToReturn  │ NothingToReturn                                      │
//! │ Internal         │ Store, Core                                          │
//! └──────────────────┴──────────────────────────────────────────────────────┘
//! ```

use biblio_core::CoreError;
use biblio_store::StoreError;
use thiserror::Error;

/// Failure category of a lending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LendingStatus {
    /// The identifier or title was empty after trimming.
    InvalidInput,
    /// No record matches.
    NotFound,
    /// Every copy is on loan.
    NoCapacity,
    /// No copy is on loan.
    NothingToReturn,
    /// The store could not be read or written.
    Internal,
}

impl std::fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LendingStatus::InvalidInput => "invalid_input",
            LendingStatus::NotFound => "not_found",
            LendingStatus::NoCapacity => "no_capacity",
            LendingStatus::NothingToReturn => "nothing_to_return",
            LendingStatus::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Lending operation errors.
#[derive(Debug, Error)]
pub enum LendingError {
    /// Blank ISBN. The store is never touched.
    #[error("ISBN cannot be empty.")]
    EmptyIsbn,

    /// Blank title. The store is never touched.
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("No book exists with that ISBN.")]
    IsbnNotFound { isbn: String },

    #[error("No book exists with that title.")]
    TitleNotFound { title: String },

    /// Borrow refused; the record is unchanged.
    #[error("No copies available.")]
    NoCapacity(#[source] CoreError),

    /// Return refused; the record is unchanged.
    #[error("No loans registered to return.")]
    NothingToReturn(#[source] CoreError),

    /// Loading or saving the store failed.
    ///
    /// ## When This Occurs
    /// - Store file unreadable or not UTF-8
    /// - Temporary file can't be written (disk full, permissions)
    /// - Final rename fails
    ///
    /// An in-memory mutation made before the failure is discarded.
    #[error("Internal error: {0}")]
    Store(#[from] StoreError),

    /// A domain failure with no client-facing category.
    #[error("Internal error: {0}")]
    Core(#[source] CoreError),
}

impl From<CoreError> for LendingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoCopiesAvailable { .. } => LendingError::NoCapacity(err),
            CoreError::NothingToReturn { .. } => LendingError::NothingToReturn(err),
            other => LendingError::Core(other),
        }
    }
}

impl LendingError {
    /// Category of this failure.
    pub fn status(&self) -> LendingStatus {
        match self {
            LendingError::EmptyIsbn | LendingError::EmptyTitle => LendingStatus::InvalidInput,
            LendingError::IsbnNotFound { .. } | LendingError::TitleNotFound { .. } => {
                LendingStatus::NotFound
            }
            LendingError::NoCapacity(_) => LendingStatus::NoCapacity,
            LendingError::NothingToReturn(_) => LendingStatus::NothingToReturn,
            LendingError::Store(_) | LendingError::Core(_) => LendingStatus::Internal,
        }
    }

    /// Human-readable message for the caller.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for lending operations.
pub type LendingResult<T> = Result<T, LendingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(LendingError::EmptyIsbn.message(), "ISBN cannot be empty.");
        assert_eq!(LendingError::EmptyTitle.message(), "Title cannot be empty.");
        assert_eq!(
            LendingError::IsbnNotFound { isbn: "x".into() }.message(),
            "No book exists with that ISBN."
        );
        assert_eq!(
            LendingError::TitleNotFound { title: "x".into() }.message(),
            "No book exists with that title."
        );
    }

    #[test]
    fn test_core_errors_map_to_categories() {
        let no_copies = LendingError::from(CoreError::NoCopiesAvailable {
            isbn: "9781492078005".into(),
            title: "Designing Data".into(),
        });
        assert_eq!(no_copies.status(), LendingStatus::NoCapacity);
        assert_eq!(no_copies.message(), "No copies available.");

        let nothing = LendingError::from(CoreError::NothingToReturn {
            isbn: "9781492078005".into(),
            available: 3,
        });
        assert_eq!(nothing.status(), LendingStatus::NothingToReturn);
        assert_eq!(nothing.message(), "No loans registered to return.");

        let date = NaiveDate::MAX;
        let internal = LendingError::from(CoreError::DateOutOfRange(date));
        assert_eq!(internal.status(), LendingStatus::Internal);
        assert!(internal.message().starts_with("Internal error: "));
    }

    #[test]
    fn test_store_error_is_internal() {
        let err = LendingError::from(StoreError::io(
            "biblioteca.txt",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        ));
        assert_eq!(err.status(), LendingStatus::Internal);
        assert_eq!(
            err.message(),
            "Internal error: Store I/O failed for biblioteca.txt: disk full"
        );
    }
}
