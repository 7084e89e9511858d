//! # Lending Service
//!
//! The four lending operations over a [`BookStore`].
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  borrow_by_id(" 9780134685991 ")                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim + require non-empty ──── blank ────► EmptyIsbn (store untouched) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.lock().await ─────────────── exclusive region begins ──┐        │
//! │       │                                                        │        │
//! │       ▼                                                        │        │
//! │  load ──► find ──► borrow_one ──► save (temp + rename)         │        │
//! │            │           │            │                          │        │
//! │            ▼           ▼            ▼                          │        │
//! │       IsbnNotFound  NoCapacity   Store (internal)              │        │
//! │                                                                │        │
//! │  session dropped ────────────────── exclusive region ends ◄────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries take the region too, so they never see a state older than a
//! write that has already completed.

use biblio_core::{loan, validation, Book};
use biblio_store::{find_by_id, find_by_id_mut, find_by_title_mut, BookStore, StoreError};
use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::error::{LendingError, LendingResult};
use crate::{MSG_BOOK_FOUND, MSG_LOAN_REGISTERED, MSG_RETURN_REGISTERED};

/// Source of "today" for due dates.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// =============================================================================
// Results
// =============================================================================

/// Successful [`LendingService::query_by_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub book: Book,
    pub message: &'static str,
}

impl BookDetails {
    /// Copies that can still be borrowed.
    pub fn available(&self) -> i64 {
        self.book.available()
    }
}

/// Successful borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub isbn: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub remaining_available: i64,
    pub message: &'static str,
}

impl LoanReceipt {
    /// Due date as `YYYY-MM-DD`.
    pub fn due_date_string(&self) -> String {
        loan::format_due_date(self.due_date)
    }
}

/// Successful return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub isbn: String,
    pub available: i64,
    pub message: &'static str,
}

/// How a borrow request names its book.
#[derive(Debug, Clone, Copy)]
enum BookKey<'a> {
    Isbn(&'a str),
    Title(&'a str),
}

// =============================================================================
// Service
// =============================================================================

/// Lending operations on one book store.
///
/// Clones share the store and its exclusive-access region.
///
/// ## Example
/// ```rust,ignore
/// let store = BookStore::open(StoreConfig::new("biblioteca.txt")).await?;
/// let service = LendingService::new(store);
///
/// let receipt = service.borrow_by_id("9780134685991").await?;
/// println!("Due {}", receipt.due_date_string());
/// ```
#[derive(Debug, Clone)]
pub struct LendingService {
    store: BookStore,
    clock: Clock,
}

impl LendingService {
    /// Creates a service that dates loans with the local calendar day.
    pub fn new(store: BookStore) -> Self {
        LendingService {
            store,
            clock: local_today,
        }
    }

    /// Replaces the clock used for due dates.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Looks a book up by ISBN. Never mutates the store.
    pub async fn query_by_id(&self, isbn: &str) -> LendingResult<BookDetails> {
        let isbn = validation::require_isbn(isbn).map_err(|_| LendingError::EmptyIsbn)?;

        let session = self.store.lock().await;
        let books = session.load().await.map_err(internal)?;
        drop(session);

        let book = find_by_id(&books, isbn).ok_or_else(|| LendingError::IsbnNotFound {
            isbn: isbn.to_string(),
        })?;

        Ok(BookDetails {
            book: book.clone(),
            message: MSG_BOOK_FOUND,
        })
    }

    /// Lends one copy of the book with this ISBN.
    pub async fn borrow_by_id(&self, isbn: &str) -> LendingResult<LoanReceipt> {
        let isbn = validation::require_isbn(isbn).map_err(|_| LendingError::EmptyIsbn)?;
        self.borrow(BookKey::Isbn(isbn)).await
    }

    /// Lends one copy of the first book with this title.
    pub async fn borrow_by_title(&self, title: &str) -> LendingResult<LoanReceipt> {
        let title = validation::require_title(title).map_err(|_| LendingError::EmptyTitle)?;
        self.borrow(BookKey::Title(title)).await
    }

    /// Takes one copy of the book with this ISBN back.
    pub async fn return_by_id(&self, isbn: &str) -> LendingResult<ReturnReceipt> {
        let isbn = validation::require_isbn(isbn).map_err(|_| LendingError::EmptyIsbn)?;

        let session = self.store.lock().await;
        let mut books = session.load().await.map_err(internal)?;

        let book = find_by_id_mut(&mut books, isbn).ok_or_else(|| LendingError::IsbnNotFound {
            isbn: isbn.to_string(),
        })?;

        let available = book.return_one().map_err(|e| {
            warn!(isbn = %isbn, error = %e, "Return rejected");
            LendingError::from(e)
        })?;
        let isbn = book.isbn().to_string();

        session.save(&books).await.map_err(internal)?;

        info!(isbn = %isbn, available, "Return registered");

        Ok(ReturnReceipt {
            isbn,
            available,
            message: MSG_RETURN_REGISTERED,
        })
    }

    async fn borrow(&self, key: BookKey<'_>) -> LendingResult<LoanReceipt> {
        let session = self.store.lock().await;
        let mut books = session.load().await.map_err(internal)?;

        let book = match key {
            BookKey::Isbn(isbn) => {
                find_by_id_mut(&mut books, isbn).ok_or_else(|| LendingError::IsbnNotFound {
                    isbn: isbn.to_string(),
                })?
            }
            BookKey::Title(title) => {
                find_by_title_mut(&mut books, title).ok_or_else(|| LendingError::TitleNotFound {
                    title: title.to_string(),
                })?
            }
        };

        let due_date = loan::due_date((self.clock)())?;

        let remaining_available = book.borrow_one().map_err(|e| {
            warn!(key = ?key, error = %e, "Borrow rejected");
            LendingError::from(e)
        })?;
        let isbn = book.isbn().to_string();
        let title = book.title().to_string();

        session.save(&books).await.map_err(internal)?;

        info!(
            isbn = %isbn,
            remaining = remaining_available,
            due = %due_date,
            "Loan registered"
        );

        Ok(LoanReceipt {
            isbn,
            title,
            due_date,
            remaining_available,
            message: MSG_LOAN_REGISTERED,
        })
    }
}

fn internal(err: StoreError) -> LendingError {
    error!(error = %err, "Book store failure");
    LendingError::Store(err)
}

// =============================================================================
// Tests
// =============================================================================
