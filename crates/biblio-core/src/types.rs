//! # Domain Types
//!
//! The book record and its lending state.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │        Book         │          │  AvailabilityState  │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  isbn               │ state()  │  Available          │              │
//! │  │  title              │ ───────► │  Exhausted          │              │
//! │  │  author             │          └─────────────────────┘              │
//! │  │  total              │                                                │
//! │  │  borrowed           │  available() = total - borrowed               │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lending State Machine
//! ```text
//!              borrow_one() (available > 1)
//!               ┌────────┐
//!               │        ▼
//!          ┌─────────────────┐  borrow_one() (available == 1)  ┌───────────┐
//!  ───────►│    Available    │ ──────────────────────────────► │ Exhausted │
//!          └─────────────────┘ ◄────────────────────────────── └───────────┘
//!               ▲        │           return_one()                  │
//!               └────────┘                                         │ borrow_one()
//!          return_one() (borrowed > 0)                             ▼
//!                                                          NoCopiesAvailable
//! ```
//!
//! Fields are private so the `0 <= borrowed <= total` invariant can only be
//! changed through [`Book::borrow_one`] and [`Book::return_one`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_copies, validate_text_field};

// =============================================================================
// Availability State
// =============================================================================

/// Observable lending state of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityState {
    /// At least one copy can be borrowed.
    Available,
    /// Every copy is on loan (or the library owns none).
    Exhausted,
}

impl std::fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityState::Available => write!(f, "available"),
            AvailabilityState::Exhausted => write!(f, "exhausted"),
        }
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book held by the library.
///
/// ## Example
/// ```rust
/// use biblio_core::{AvailabilityState, Book};
///
/// let mut book = Book::new("9780134685991", "Effective Java", "Joshua Bloch", 5, 2).unwrap();
/// assert_eq!(book.available(), 3);
///
/// let remaining = book.borrow_one().unwrap();
/// assert_eq!(remaining, 2);
/// assert_eq!(book.state(), AvailabilityState::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookFields")]
pub struct Book {
    /// ISBN-13 identifier (format not enforced).
    isbn: String,

    /// Full title.
    title: String,

    /// Author name.
    author: String,

    /// Total copies owned by the library.
    total: i64,

    /// Copies currently on loan.
    borrowed: i64,
}

/// Unchecked field set, used to route deserialization through [`Book::new`].
#[derive(Deserialize)]
struct BookFields {
    isbn: String,
    title: String,
    author: String,
    total: i64,
    borrowed: i64,
}

impl TryFrom<BookFields> for Book {
    type Error = ValidationError;

    fn try_from(fields: BookFields) -> Result<Self, Self::Error> {
        Book::new(
            fields.isbn,
            fields.title,
            fields.author,
            fields.total,
            fields.borrowed,
        )
    }
}

impl Book {
    /// Creates a book record, checking every record invariant.
    ///
    /// ## Errors
    /// - `Negative` if `total` or `borrowed` is below zero
    /// - `BorrowedExceedsTotal` if more copies are on loan than owned
    /// - `InvalidFormat` if a text field contains `|` or a line break
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        total: i64,
        borrowed: i64,
    ) -> Result<Self, ValidationError> {
        let isbn = isbn.into();
        let title = title.into();
        let author = author.into();

        validate_text_field("isbn", &isbn)?;
        validate_text_field("title", &title)?;
        validate_text_field("author", &author)?;
        validate_copies(total, borrowed)?;

        Ok(Book {
            isbn,
            title,
            author,
            total,
            borrowed,
        })
    }

    /// Returns the ISBN.
    #[inline]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the total number of copies.
    #[inline]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Returns the number of copies on loan.
    #[inline]
    pub fn borrowed(&self) -> i64 {
        self.borrowed
    }

    /// Copies that can still be borrowed (`total - borrowed`).
    #[inline]
    pub fn available(&self) -> i64 {
        self.total - self.borrowed
    }

    /// Returns the current lending state.
    pub fn state(&self) -> AvailabilityState {
        if self.available() > 0 {
            AvailabilityState::Available
        } else {
            AvailabilityState::Exhausted
        }
    }

    /// Case-insensitive exact match on the identifier (query is trimmed).
    pub fn matches_isbn(&self, isbn: &str) -> bool {
        self.isbn.to_lowercase() == isbn.trim().to_lowercase()
    }

    /// Case-insensitive exact match on the title (both sides trimmed).
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.trim().to_lowercase() == title.trim().to_lowercase()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Lends one copy out.
    ///
    /// ## Returns
    /// Copies still available after the loan.
    ///
    /// ## Errors
    /// `NoCopiesAvailable` when the book is exhausted; the record is unchanged.
    pub fn borrow_one(&mut self) -> CoreResult<i64> {
        if self.state() == AvailabilityState::Exhausted {
            return Err(CoreError::NoCopiesAvailable {
                isbn: self.isbn.clone(),
                title: self.title.clone(),
            });
        }

        self.borrowed += 1;
        debug_assert!(validate_copies(self.total, self.borrowed).is_ok());
        Ok(self.available())
    }

    /// Takes one copy back.
    ///
    /// ## Returns
    /// Copies available after the return.
    ///
    /// ## Errors
    /// `NothingToReturn` when no copy is on loan; the record is unchanged.
    pub fn return_one(&mut self) -> CoreResult<i64> {
        if self.borrowed == 0 {
            return Err(CoreError::NothingToReturn {
                isbn: self.isbn.clone(),
                available: self.available(),
            });
        }

        self.borrowed -= 1;
        debug_assert!(validate_copies(self.total, self.borrowed).is_ok());
        Ok(self.available())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn effective_java() -> Book {
        Book::new("9780134685991", "Effective Java", "Joshua Bloch", 5, 2).unwrap()
    }

    #[test]
    fn test_available_is_computed() {
        assert_eq!(effective_java().available(), 3);

        let all_out = Book::new("1234567890123", "Test", "Author", 3, 3).unwrap();
        assert_eq!(all_out.available(), 0);
        assert_eq!(all_out.state(), AvailabilityState::Exhausted);
    }

    #[test]
    fn test_new_rejects_invalid_counts() {
        assert!(matches!(
            Book::new("1234567890123", "Test", "Author", 2, 5),
            Err(ValidationError::BorrowedExceedsTotal { .. })
        ));
        assert!(matches!(
            Book::new("1234567890123", "Test", "Author", -1, 0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            Book::new("1234567890123", "Test", "Author", 5, -1),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_new_rejects_delimiter_in_text() {
        assert!(Book::new("1234567890123", "A|B", "Author", 1, 0).is_err());
        assert!(Book::new("1234567890123", "Title", "Multi\nLine", 1, 0).is_err());
    }

    #[test]
    fn test_zero_copies_is_exhausted() {
        let mut book = Book::new("1234567890123", "Ghost", "Nobody", 0, 0).unwrap();
        assert_eq!(book.state(), AvailabilityState::Exhausted);
        assert!(book.borrow_one().is_err());
        assert!(book.return_one().is_err());
    }

    #[test]
    fn test_borrow_until_exhausted() {
        let mut book = effective_java();
        assert_eq!(book.borrow_one().unwrap(), 2);
        assert_eq!(book.borrow_one().unwrap(), 1);
        assert_eq!(book.borrow_one().unwrap(), 0);
        assert_eq!(book.state(), AvailabilityState::Exhausted);

        let err = book.borrow_one().unwrap_err();
        assert!(matches!(err, CoreError::NoCopiesAvailable { .. }));
        assert_eq!(book.borrowed(), 5);
    }

    #[test]
    fn test_return_guard() {
        let mut book = Book::new("9781492078005", "Designing Data", "Martin Kleppmann", 3, 0).unwrap();
        let err = book.return_one().unwrap_err();
        assert_eq!(
            err,
            CoreError::NothingToReturn {
                isbn: "9781492078005".to_string(),
                available: 3,
            }
        );
        assert_eq!(book.borrowed(), 0);
    }

    #[test]
    fn test_borrow_return_symmetry() {
        let mut book = effective_java();
        let before = book.available();
        book.borrow_one().unwrap();
        assert_eq!(book.return_one().unwrap(), before);
        assert_eq!(book, effective_java());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let book = effective_java();
        assert!(book.matches_isbn(" 9780134685991 "));
        assert!(!book.matches_isbn("0000000000000"));

        assert!(book.matches_title("effective java"));
        assert!(book.matches_title("  EFFECTIVE JAVA  "));
        assert!(!book.matches_title("Effective"));

        let lettered = Book::new("978013468599X", "T", "A", 1, 0).unwrap();
        assert!(lettered.matches_isbn("978013468599x"));
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let ok: Book = serde_json::from_str(
            r#"{"isbn":"9780134685991","title":"Effective Java","author":"Joshua Bloch","total":5,"borrowed":2}"#,
        )
        .unwrap();
        assert_eq!(ok, effective_java());

        let bad = serde_json::from_str::<Book>(
            r#"{"isbn":"x","title":"t","author":"a","total":1,"borrowed":2}"#,
        );
        assert!(bad.is_err());
    }
}
