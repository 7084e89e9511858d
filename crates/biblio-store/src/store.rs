//! # Book Store Handle
//!
//! Opening, loading and atomically saving the flat-file store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Flat-File Book Store                               │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(path) ← Configure store settings                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookStore::open(config).await ← Create file + parent dirs if missing  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │      Arc<tokio::sync::Mutex<()>>         │  (one per store file)     │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Concurrent requests                                            │
//! │       ▼                                                                 │
//! │  Request 1 ──► store.lock().await ──► load ─ mutate ─ save ─ drop      │
//! │  Request 2 ──► waits ...................................► lock ...     │
//! │  (Read-modify-write cycles never interleave)                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomic Save
//! ```text
//!  books ──encode──► .biblioteca.txt.<uuid>.tmp ──fsync──► rename ──► biblioteca.txt
//! ```
//! The temporary file lives in the store's own directory so the final
//! `rename` never crosses a filesystem. Readers see the old contents or the
//! new contents, never a mix.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use biblio_core::{validation, Book};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::codec;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data/biblioteca.txt")
///     .create_if_missing(true);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: PathBuf,

    /// Create the file (and its parent directories) when it is missing,
    /// on open and again before every load and save.
    /// Default: true
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Creates a store configuration for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            create_if_missing: true,
        }
    }

    /// Sets whether a missing file is created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

// =============================================================================
// BookStore
// =============================================================================

/// Handle to the durable book store.
///
/// Cloning is cheap; clones share the same exclusive-access mutex, so every
/// clone of one store serialises its write sessions against the others.
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
    create_if_missing: bool,
    guard: Arc<Mutex<()>>,
}

impl BookStore {
    /// Opens the store described by `config`.
    ///
    /// ## Errors
    /// - `InvalidPath` if the path has no file name
    /// - `Io` if the file is missing and can't be created
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        let path = config.path;
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath(path));
        }

        if config.create_if_missing {
            ensure_file(&path).await?;
        }

        info!(path = %path.display(), "Book store opened");

        Ok(BookStore {
            path,
            create_if_missing: config.create_if_missing,
            guard: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed record without taking the lock.
    ///
    /// A missing file is recreated empty (or, with `create_if_missing`
    /// off, reads as an empty collection). Malformed lines, including lines
    /// that are not UTF-8, are logged and skipped.
    pub async fn load(&self) -> StoreResult<Vec<Book>> {
        if self.create_if_missing {
            ensure_file(&self.path).await?;
        }

        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let decoded = codec::decode_bytes(&contents);

        for rejected in &decoded.rejected {
            warn!(
                line = rejected.line_number,
                content = %rejected.content,
                reason = %rejected.reason,
                "Skipping malformed store line"
            );
        }

        for book in &decoded.books {
            if let Err(e) = validation::validate_isbn(book.isbn()) {
                warn!(isbn = %book.isbn(), reason = %e, "Record identifier is not an ISBN-13");
            }
        }

        debug!(
            books = decoded.books.len(),
            skipped = decoded.rejected.len(),
            "Book store loaded"
        );

        Ok(decoded.books)
    }

    /// Enters the exclusive-access region.
    ///
    /// The returned session is the only way to save. The region ends when
    /// the session is dropped, on every exit path.
    pub async fn lock(&self) -> WriteSession<'_> {
        let guard = self.guard.lock().await;
        WriteSession {
            store: self,
            _guard: guard,
        }
    }

    /// Checks that the store file is a regular file that can be opened for
    /// reading.
    pub async fn health_check(&self) -> StoreResult<()> {
        let file = fs::File::open(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        let metadata = file
            .metadata()
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        if !metadata.is_file() {
            return Err(StoreError::io(
                &self.path,
                std::io::Error::new(ErrorKind::InvalidInput, "store path is not a regular file"),
            ));
        }
        Ok(())
    }

    /// Replaces the store contents with `books`.
    async fn save(&self, books: &[Book]) -> StoreResult<()> {
        if self.create_if_missing {
            ensure_file(&self.path).await?;
        }

        let dir = parent_dir(&self.path);
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StoreError::InvalidPath(self.path.clone()))?
            .to_string_lossy();
        let tmp = dir.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = write_and_replace(&tmp, &self.path, codec::encode(books)).await {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(tmp = %tmp.display(), error = %cleanup, "Failed to remove temporary store file");
                }
            }
            return Err(e);
        }

        debug!(books = books.len(), path = %self.path.display(), "Book store saved");
        Ok(())
    }
}

// =============================================================================
// Write Session
// =============================================================================

/// Exclusive access to the store for one read-modify-write cycle.
///
/// ## Usage
/// ```rust,ignore
/// let session = store.lock().await;
/// let mut books = session.load().await?;
/// if let Some(book) = find_by_id_mut(&mut books, isbn) {
///     book.borrow_one()?;
///     session.save(&books).await?;
/// }
/// // lock released here
/// ```
pub struct WriteSession<'a> {
    store: &'a BookStore,
    _guard: MutexGuard<'a, ()>,
}

impl WriteSession<'_> {
    /// Reads the current records.
    pub async fn load(&self) -> StoreResult<Vec<Book>> {
        self.store.load().await
    }

    /// Atomically replaces the store contents.
    pub async fn save(&self, books: &[Book]) -> StoreResult<()> {
        self.store.save(books).await
    }
}

// =============================================================================
// File Helpers
// =============================================================================

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Creates the parent directories and an empty file if they don't exist.
async fn ensure_file(path: &Path) -> StoreResult<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir)
        .await
        .map_err(|e| StoreError::io(dir, e))?;

    match OpenOptions::new().write(true).create_new(true).open(path).await {
        Ok(_) => {
            info!(path = %path.display(), "Created empty book store");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

async fn write_and_replace(tmp: &Path, target: &Path, contents: String) -> StoreResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp)
        .await
        .map_err(|e| StoreError::io(tmp, e))?;

    file.write_all(contents.as_bytes())
        .await
        .map_err(|e| StoreError::io(tmp, e))?;
    file.sync_all().await.map_err(|e| StoreError::io(tmp, e))?;
    drop(file);

    fs::rename(tmp, target)
        .await
        .map_err(|e| StoreError::io(target, e))
}

// =============================================================================
// Tests
// =============================================================================
