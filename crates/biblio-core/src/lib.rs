//! # biblio-core: Pure Lending Logic for Biblio
//!
//! This crate is the **heart** of Biblio. It holds the book record, its
//! invariants and its lending transitions as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Biblio Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 biblio-server (gRPC / tonic)                    │   │
//! │  │    QueryById, BorrowById, BorrowByTitle, ReturnById            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                biblio-lending (LendingService)                  │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────┐  ┌────────────▼───────────────┐   │
//! │  │   ★ biblio-core (THIS CRATE) ★  │  │  biblio-store (flat file)  │   │
//! │  │                                 │  │  load / save / lock        │   │
//! │  │  types · loan · validation      │  └────────────────────────────┘   │
//! │  │  NO I/O • NO CLOCK • PURE       │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Book` record and its availability state machine
//! - [`loan`] - Due-date arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input and record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use biblio_core::{loan, Book};
//! use chrono::NaiveDate;
//!
//! let mut book = Book::new("9780134685991", "Effective Java", "Joshua Bloch", 5, 2).unwrap();
//! let remaining = book.borrow_one().unwrap();
//! assert_eq!(remaining, 2);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! assert_eq!(loan::format_due_date(loan::due_date(today).unwrap()), "2024-05-08");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a loan, in calendar days.
pub const LOAN_PERIOD_DAYS: u64 = 7;

/// Field separator of the durable store's line format.
///
/// Lives here because [`Book::new`] must reject text that contains it.
pub const RECORD_DELIMITER: char = '|';

/// Digits in an ISBN-13 identifier.
pub const ISBN_LENGTH: usize = 13;
