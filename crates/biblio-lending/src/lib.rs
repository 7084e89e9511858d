//! # biblio-lending: Lending Operations for Biblio
//!
//! Query, borrow and return books held in a [`biblio_store::BookStore`].
//! Nothing here knows about gRPC; the server maps [`LendingError::status`]
//! onto transport codes.
//!
//! ## Operations
//! ```text
//! ┌────────────────────┬──────────────────────┬─────────────────────────────┐
//! │ Operation          │ Effect               │ Failures                    │
//! ├────────────────────┼──────────────────────┼─────────────────────────────┤
//! │ query_by_id        │ none                 │ InvalidInput, NotFound      │
//! │ borrow_by_id       │ borrowed += 1        │ + NoCapacity                │
//! │ borrow_by_title    │ borrowed += 1        │ + NoCapacity                │
//! │ return_by_id       │ borrowed -= 1        │ + NothingToReturn           │
//! └────────────────────┴──────────────────────┴─────────────────────────────┘
//!   every operation may also fail with Internal (store I/O)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_lending::LendingService;
//! use biblio_store::{BookStore, StoreConfig};
//!
//! let store = BookStore::open(StoreConfig::new("biblioteca.txt")).await?;
//! let service = LendingService::new(store);
//!
//! match service.borrow_by_title("Effective Java").await {
//!     Ok(receipt) => println!("{} Due {}", receipt.message, receipt.due_date_string()),
//!     Err(e) => println!("{} ({})", e.message(), e.status()),
//! }
//! ```

pub mod error;
pub mod service;

pub use error::{LendingError, LendingResult, LendingStatus};
pub use service::{BookDetails, Clock, LendingService, LoanReceipt, ReturnReceipt};

// =============================================================================
// Success Messages
// =============================================================================

/// Message of a successful query.
pub const MSG_BOOK_FOUND: &str = "Book found.";

/// Message of a successful borrow.
pub const MSG_LOAN_REGISTERED: &str = "Loan registered.";

/// Message of a successful return.
pub const MSG_RETURN_REGISTERED: &str = "Return registered.";
