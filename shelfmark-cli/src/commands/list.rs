//! List command implementation

use anyhow::Result;
use std::path::Path;

/// Show the reading list in insertion order
pub async fn list(data_dir: &Path, json: bool) -> Result<()> {
    let store = super::open_store(data_dir).await;
    let books = store.books().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("Your reading list is empty. Try `shelfmark add <query>`.");
        return Ok(());
    }

    for tracked in &books {
        println!("{}", super::describe(&tracked.book));
        match tracked.book.info.page_count {
            Some(total) => println!(
                "    page {}/{} ({:.0}%)  id: {}",
                tracked.current_page,
                total,
                tracked.progress() * 100.0,
                tracked.book.id
            ),
            None => println!("    page {}  id: {}", tracked.current_page, tracked.book.id),
        }
    }
    Ok(())
}
