//! Catalog book types as returned by the search API

use super::ImageLinks;
use serde::{Deserialize, Serialize};

/// A book record from the catalog search API
///
/// Field names are camelCase on the wire to match the volumes API; the same
/// encoding is used for the persisted reading list, so saved records stay
/// human-inspectable alongside raw API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Stable catalog volume id, assigned by the API
    pub id: String,

    /// Everything the catalog knows about the volume
    #[serde(rename = "volumeInfo")]
    pub info: BookInfo,
}

impl Book {
    /// Create a book with the given catalog id and metadata
    pub fn new(id: impl Into<String>, info: BookInfo) -> Self {
        Self {
            id: id.into(),
            info,
        }
    }
}

/// Identity is the catalog id alone. Metadata can drift between fetches
/// (truncated descriptions, updated ratings) and never affects equality.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

/// Volume metadata; every field except the title may be absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfo {
    /// Book title
    pub title: String,

    /// Authors, in catalog order
    pub authors: Option<Vec<String>>,

    /// Description/summary, possibly truncated by the API
    pub description: Option<String>,

    /// Cover image links at multiple resolutions
    pub image_links: Option<ImageLinks>,

    /// Total page count
    pub page_count: Option<i64>,

    /// Publisher name
    pub publisher: Option<String>,

    /// Publication date as reported by the catalog (free-form string)
    pub published_date: Option<String>,

    /// Subject/genre categories
    pub categories: Option<Vec<String>>,

    /// Language code (ISO 639-1)
    pub language: Option<String>,

    /// Link to the catalog's preview page
    pub preview_link: Option<String>,

    /// Average user rating
    pub average_rating: Option<f64>,

    /// Number of user ratings
    pub ratings_count: Option<i64>,

    /// Industry identifiers (ISBN_10, ISBN_13, ...)
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

impl BookInfo {
    /// Create metadata with the required title; all other fields absent
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: None,
            description: None,
            image_links: None,
            page_count: None,
            publisher: None,
            published_date: None,
            categories: None,
            language: None,
            preview_link: None,
            average_rating: None,
            ratings_count: None,
            industry_identifiers: None,
        }
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.get_or_insert_with(Vec::new).push(author.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the page count
    pub fn with_page_count(mut self, page_count: i64) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }
}

/// An industry identifier attached to a volume
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndustryIdentifier {
    /// Identifier scheme, e.g. "ISBN_10" or "ISBN_13"
    #[serde(rename = "type")]
    pub kind: String,

    /// The identifier value
    pub identifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_id_only() {
        let a = Book::new("vol-1", BookInfo::new("First Edition"));
        let b = Book::new(
            "vol-1",
            BookInfo::new("First Edition (Annotated)").with_author("Someone Else"),
        );
        let c = Book::new("vol-2", BookInfo::new("First Edition"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_wire_decoding() {
        let json = r#"{
            "id": "zyTCAlFPjgYC",
            "volumeInfo": {
                "title": "The Google Story",
                "authors": ["David A. Vise", "Mark Malseed"],
                "publisher": "Random House Digital, Inc.",
                "publishedDate": "2005-11-15",
                "pageCount": 207,
                "industryIdentifiers": [
                    {"type": "ISBN_10", "identifier": "055380457X"}
                ]
            }
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "zyTCAlFPjgYC");
        assert_eq!(book.info.title, "The Google Story");
        assert_eq!(book.info.page_count, Some(207));
        assert_eq!(book.info.authors.as_ref().unwrap().len(), 2);
        assert!(book.info.description.is_none());
        assert_eq!(
            book.info.industry_identifiers.as_ref().unwrap()[0].kind,
            "ISBN_10"
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let book = Book::new(
            "vol-9",
            BookInfo::new("Round Trip")
                .with_author("A. Author")
                .with_page_count(320),
        );
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("volumeInfo"));
        assert!(json.contains("pageCount"));
        let decoded: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.info.page_count, Some(320));
    }
}
