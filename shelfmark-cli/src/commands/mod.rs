//! CLI command implementations

mod add;
mod list;
mod progress;
mod recent;
mod remove;
mod search;
mod session;

pub use add::add;
pub use list::list;
pub use progress::progress;
pub use recent::recent;
pub use remove::remove;
pub use search::search;
pub use session::session;

use shelfmark_core::{LocalStorage, ReadingListStore, StorageBackend};
use std::path::Path;
use std::sync::Arc;

/// Backend over the resolved data directory
fn backend(data_dir: &Path) -> Arc<dyn StorageBackend> {
    Arc::new(LocalStorage::new(data_dir))
}

/// Open the process-wide reading list store
async fn open_store(data_dir: &Path) -> ReadingListStore {
    ReadingListStore::open(backend(data_dir)).await
}

/// One-line display form of a catalog book
fn describe(book: &shelfmark_core::Book) -> String {
    let authors = book
        .info
        .authors
        .as_deref()
        .map(|a| a.join(", "))
        .unwrap_or_else(|| "unknown author".to_string());
    match book.info.page_count {
        Some(pages) => format!("{} — {} ({} pages)", book.info.title, authors, pages),
        None => format!("{} — {}", book.info.title, authors),
    }
}
