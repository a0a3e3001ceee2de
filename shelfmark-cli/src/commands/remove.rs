//! Remove command implementation

use anyhow::Result;
use std::path::Path;

/// Remove a book from the reading list by catalog id
pub async fn remove(data_dir: &Path, id: &str) -> Result<()> {
    let store = super::open_store(data_dir).await;

    let Some(tracked) = store.books().await.into_iter().find(|t| t.book.id == id) else {
        println!("No book with id {} in your reading list", id);
        return Ok(());
    };

    store.remove_book(&tracked.book).await;
    println!("Removed: {}", super::describe(&tracked.book));
    Ok(())
}
