//! # biblio-store: Flat-File Record Store for Biblio
//!
//! This crate owns the durable book collection: a UTF-8 text file with one
//! `|`-delimited record per line.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Biblio Data Flow                                 │
//! │                                                                         │
//! │  LendingService (borrow_by_id)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  biblio-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   BookStore   │    │    Lookup     │    │    Codec     │  │   │
//! │  │   │  (store.rs)   │    │  (lookup.rs)  │    │  (codec.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ lock()        │    │ find_by_id    │    │ decode       │  │   │
//! │  │   │ load / save   │───►│ find_by_title │    │ encode       │  │   │
//! │  │   │ atomic rename │    │ (first match) │    │ skip bad     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     biblioteca.txt                              │   │
//! │  │   9780134685991|Effective Java|Joshua Bloch|5|2                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle, exclusive-access sessions, atomic save
//! - [`codec`] - Line format encode/decode
//! - [`lookup`] - Lookup by ISBN and title
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_store::{find_by_id_mut, BookStore, StoreConfig};
//!
//! let store = BookStore::open(StoreConfig::new("biblioteca.txt")).await?;
//!
//! let session = store.lock().await;
//! let mut books = session.load().await?;
//! if let Some(book) = find_by_id_mut(&mut books, "9780134685991") {
//!     book.borrow_one()?;
//!     session.save(&books).await?;
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod lookup;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{MalformedRecord, StoreError, StoreResult};
pub use lookup::{find_by_id, find_by_id_mut, find_by_title, find_by_title_mut};
pub use store::{BookStore, StoreConfig, WriteSession};

/// Store file used when no path is configured.
pub const DEFAULT_STORE_PATH: &str = "biblioteca.txt";
