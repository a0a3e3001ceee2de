//! Shelfmark Core Library
//!
//! This crate provides the data model and state management for the Shelfmark
//! reading tracker. Books discovered through the catalog search client can be
//! promoted into the [`ReadingListStore`], which owns the user's tracked books
//! and writes every mutation through to durable key-value storage.

pub mod error;
pub mod recent;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{Result, SearchError, ShelfmarkError, StorageError};
pub use recent::RecentSearches;
pub use search::CatalogClient;
pub use session::ReadingSession;
pub use storage::{LocalStorage, MemoryStorage, StorageBackend};
pub use store::{ReadingListStore, READING_LIST_KEY};
pub use types::{Book, BookInfo, ImageLinks, IndustryIdentifier, TrackedBook};
