//! Core types for the Shelfmark data model

mod book;
mod image_links;
mod tracked;

pub use book::{Book, BookInfo, IndustryIdentifier};
pub use image_links::ImageLinks;
pub use tracked::TrackedBook;
