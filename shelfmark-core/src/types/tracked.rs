//! A saved book with local reading progress

use super::Book;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book the user has saved to their reading list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedBook {
    /// Locally generated id; stable list key across re-renders.
    /// Persisted, but excluded from equality (see `PartialEq` below).
    pub id: Uuid,

    /// The wrapped catalog book
    pub book: Book,

    /// Last page the user reported reading
    pub current_page: i64,
}

impl TrackedBook {
    /// Start tracking a book at page 0 with a fresh local id
    pub fn new(book: Book) -> Self {
        Self {
            id: Uuid::new_v4(),
            book,
            current_page: 0,
        }
    }

    /// Fraction of the book read, in `[0, 1]` under normal use.
    ///
    /// Returns 0 when the catalog reports no page count (or a non-positive
    /// one). The store does not clamp `current_page`, so out-of-range pages
    /// produce out-of-range fractions rather than a panic.
    pub fn progress(&self) -> f64 {
        match self.book.info.page_count {
            Some(total) if total > 0 => self.current_page as f64 / total as f64,
            _ => 0.0,
        }
    }
}

/// Two tracked entries are the same entry iff they wrap the same catalog
/// book. The local id and page progress are deliberately excluded so that
/// independently constructed instances for the same volume compare equal.
impl PartialEq for TrackedBook {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book
    }
}

impl Eq for TrackedBook {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookInfo;

    #[test]
    fn test_equality_ignores_local_id_and_page() {
        let book = Book::new("vol-1", BookInfo::new("Dune"));
        let mut a = TrackedBook::new(book.clone());
        let b = TrackedBook::new(book);
        a.current_page = 99;

        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_progress() {
        let book = Book::new("vol-1", BookInfo::new("Dune").with_page_count(412));
        let mut tracked = TrackedBook::new(book);
        assert_eq!(tracked.progress(), 0.0);

        tracked.current_page = 103;
        assert_eq!(tracked.progress(), 103.0 / 412.0);
    }

    #[test]
    fn test_progress_without_page_count() {
        let mut tracked = TrackedBook::new(Book::new("vol-1", BookInfo::new("Unknown Length")));
        tracked.current_page = 50;
        assert_eq!(tracked.progress(), 0.0);

        let zero = Book::new("vol-2", BookInfo::new("Zero Pages").with_page_count(0));
        let mut tracked = TrackedBook::new(zero);
        tracked.current_page = 50;
        assert_eq!(tracked.progress(), 0.0);
    }

    #[test]
    fn test_persisted_field_names() {
        let tracked = TrackedBook::new(Book::new("vol-1", BookInfo::new("Dune")));
        let json = serde_json::to_string(&tracked).unwrap();
        assert!(json.contains("currentPage"));
        assert!(json.contains("volumeInfo"));
    }
}
