//! # Validation Module
//!
//! Input validation utilities for Biblio.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client (menu)                                                │
//! │  └── Rejects blank input before calling the server                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Lending operation                                            │
//! │  └── THIS MODULE: require_isbn / require_title (trim + non-empty)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Book construction                                            │
//! │  ├── validate_copies: 0 <= borrowed <= total                           │
//! │  └── validate_text_field: no delimiter, no line breaks                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ISBN format (13 digits) is advisory only: [`is_valid_isbn`] is exposed for
//! callers that want to flag odd identifiers, but nothing here rejects them.

use crate::error::ValidationError;
use crate::{ISBN_LENGTH, RECORD_DELIMITER};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier / Title Inputs
// =============================================================================

/// Trims an ISBN supplied to an operation and rejects blank input.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::require_isbn;
///
/// assert_eq!(require_isbn("  9780134685991 ").unwrap(), "9780134685991");
/// assert!(require_isbn("   ").is_err());
/// ```
pub fn require_isbn(isbn: &str) -> ValidationResult<&str> {
    require_non_blank("isbn", isbn)
}

/// Trims a title supplied to an operation and rejects blank input.
pub fn require_title(title: &str) -> ValidationResult<&str> {
    require_non_blank("title", title)
}

fn require_non_blank<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value)
}

/// Advisory ISBN-13 check: exactly 13 ASCII digits after trimming.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::is_valid_isbn;
///
/// assert!(is_valid_isbn("9780134685991"));
/// assert!(is_valid_isbn("  9780134685991  "));
/// assert!(!is_valid_isbn("978013468A991"));
/// ```
pub fn is_valid_isbn(isbn: &str) -> bool {
    let isbn = isbn.trim();
    isbn.len() == ISBN_LENGTH && isbn.bytes().all(|b| b.is_ascii_digit())
}

/// Same check as [`is_valid_isbn`], reported as a validation error.
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    if is_valid_isbn(isbn) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: format!("must be exactly {} digits", ISBN_LENGTH),
        })
    }
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a text field of a book record.
///
/// ## Rules
/// - Must not contain the record delimiter (`|`)
/// - Must not contain line breaks
///
/// Either would split the record when it is written back to the store.
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.contains(RECORD_DELIMITER) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must not contain '{}'", RECORD_DELIMITER),
        });
    }

    if value.contains(&['\n', '\r'][..]) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain line breaks".to_string(),
        });
    }

    Ok(())
}

/// Validates the copy counts of a book record.
///
/// ## Rules
/// - `total >= 0`
/// - `borrowed >= 0`
/// - `borrowed <= total`
///
/// ## Example
/// ```rust
/// use biblio_core::validation::validate_copies;
///
/// assert!(validate_copies(5, 2).is_ok());
/// assert!(validate_copies(3, 3).is_ok());
/// assert!(validate_copies(2, 5).is_err());
/// assert!(validate_copies(-1, 0).is_err());
/// ```
pub fn validate_copies(total: i64, borrowed: i64) -> ValidationResult<()> {
    if total < 0 {
        return Err(ValidationError::Negative {
            field: "total".to_string(),
            value: total,
        });
    }

    if borrowed < 0 {
        return Err(ValidationError::Negative {
            field: "borrowed".to_string(),
            value: borrowed,
        });
    }

    if borrowed > total {
        return Err(ValidationError::BorrowedExceedsTotal { borrowed, total });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_isbn() {
        assert_eq!(require_isbn("9780134685991").unwrap(), "9780134685991");
        assert_eq!(require_isbn("\t9780134685991\n").unwrap(), "9780134685991");
        assert_eq!(
            require_isbn("").unwrap_err(),
            ValidationError::required("isbn")
        );
        assert!(require_isbn(" ").is_err());
    }

    #[test]
    fn test_require_title() {
        assert_eq!(require_title("  Effective Java ").unwrap(), "Effective Java");
        assert_eq!(
            require_title("   ").unwrap_err(),
            ValidationError::required("title")
        );
    }

    #[test]
    fn test_is_valid_isbn() {
        assert!(is_valid_isbn("9780134685991"));
        assert!(is_valid_isbn("  9780134685991  "));

        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("978013468A991"));
        assert!(!is_valid_isbn("97801346859912"));
        assert!(!is_valid_isbn("978-0134685991"));
        assert!(validate_isbn("12345").is_err());
    }

    #[test]
    fn test_validate_text_field() {
        assert!(validate_text_field("title", "Clean Code").is_ok());
        assert!(validate_text_field("title", "").is_ok());
        assert!(validate_text_field("title", "Left|Right").is_err());
        assert!(validate_text_field("author", "Line\nBreak").is_err());
        assert!(validate_text_field("author", "Carriage\rReturn").is_err());
    }

    #[test]
    fn test_validate_copies() {
        assert!(validate_copies(0, 0).is_ok());
        assert!(validate_copies(5, 2).is_ok());
        assert!(validate_copies(3, 3).is_ok());

        assert!(matches!(
            validate_copies(2, 5),
            Err(ValidationError::BorrowedExceedsTotal { borrowed: 5, total: 2 })
        ));
        assert!(matches!(
            validate_copies(-1, 0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_copies(5, -1),
            Err(ValidationError::Negative { .. })
        ));
    }
}
