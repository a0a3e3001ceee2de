//! Progress command implementation

use anyhow::Result;
use std::path::Path;

/// Record the current page for a tracked book
pub async fn progress(data_dir: &Path, id: &str, page: i64) -> Result<()> {
    let store = super::open_store(data_dir).await;

    let Some(tracked) = store.books().await.into_iter().find(|t| t.book.id == id) else {
        println!("No book with id {} in your reading list", id);
        return Ok(());
    };

    store.update_progress(&tracked.book, page).await;

    match tracked.book.info.page_count {
        Some(total) if total > 0 => println!(
            "{}: page {}/{} ({:.0}%)",
            tracked.book.info.title,
            page,
            total,
            page as f64 / total as f64 * 100.0
        ),
        _ => println!("{}: page {}", tracked.book.info.title, page),
    }
    Ok(())
}
