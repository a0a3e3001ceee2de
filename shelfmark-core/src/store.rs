//! The reading-list store: single source of truth for tracked books
//!
//! One instance is constructed at startup and shared by every consumer;
//! screens must never build their own copies with divergent state. Every
//! mutation writes the whole list through to the storage backend before the
//! write lock is released, so a read immediately following a write from any
//! task observes the new state.

use crate::storage::StorageBackend;
use crate::types::{Book, TrackedBook};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fixed storage key for the persisted reading list
pub const READING_LIST_KEY: &str = "saved_books.json";

/// Owns the ordered, deduplicated collection of tracked books
pub struct ReadingListStore {
    backend: Arc<dyn StorageBackend>,
    books: RwLock<Vec<TrackedBook>>,
}

impl ReadingListStore {
    /// Open the store against a backend, loading any persisted list.
    ///
    /// Absent or corrupt persisted data yields an empty list. Corrupted
    /// local state must never brick the app, so the failure is logged and
    /// swallowed.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let books = match backend.read(READING_LIST_KEY).await {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(books) => books,
                Err(e) => {
                    tracing::warn!("discarding unreadable reading list: {}", e);
                    Vec::new()
                }
            },
            Err(crate::error::StorageError::NotFound(_)) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to load reading list, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            backend,
            books: RwLock::new(books),
        }
    }

    /// Save a book to the reading list.
    ///
    /// Appends a fresh entry at page 0 to the end of the list. If the book
    /// is already tracked (same catalog id) this is a silent no-op, so
    /// saving from multiple screens is idempotent.
    pub async fn add_book(&self, book: Book) {
        let mut books = self.books.write().await;
        if books.iter().any(|t| t.book == book) {
            return;
        }
        books.push(TrackedBook::new(book));
        self.persist(&books).await;
    }

    /// Remove a book from the reading list; no-op if it is not tracked
    pub async fn remove_book(&self, book: &Book) {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|t| t.book != *book);
        if books.len() != before {
            self.persist(&books).await;
        }
    }

    /// Whether the book is currently tracked
    pub async fn is_book_saved(&self, book: &Book) -> bool {
        self.books.read().await.iter().any(|t| t.book == *book)
    }

    /// Set the current page for a tracked book; no-op if it is not tracked.
    ///
    /// The value is stored as given: no clamping to `[0, page_count]`.
    /// Callers that want bounds apply them before calling (see
    /// [`crate::session::pages_to_credit`]).
    pub async fn update_progress(&self, book: &Book, current_page: i64) {
        let mut books = self.books.write().await;
        let Some(entry) = books.iter_mut().find(|t| t.book == *book) else {
            return;
        };
        entry.current_page = current_page;
        self.persist(&books).await;
    }

    /// Snapshot of the current list, in insertion order
    pub async fn books(&self) -> Vec<TrackedBook> {
        self.books.read().await.clone()
    }

    /// Snapshot of the tracked entry for a book, if any
    pub async fn find(&self, book: &Book) -> Option<TrackedBook> {
        self.books
            .read()
            .await
            .iter()
            .find(|t| t.book == *book)
            .cloned()
    }

    /// Write the full list through to the backend.
    ///
    /// Failures are logged, never propagated: in-memory state stays the
    /// source of truth for the rest of the session, at the cost of losing
    /// the unpersisted change on the next launch.
    async fn persist(&self, books: &[TrackedBook]) {
        let data = match serde_json::to_vec_pretty(books) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("failed to encode reading list: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(READING_LIST_KEY, data).await {
            tracing::warn!("failed to persist reading list: {}", e);
        }
    }
}
