//! Add command implementation

use anyhow::{bail, Context, Result};
use shelfmark_core::CatalogClient;
use std::path::Path;

/// Search the catalog and save the picked result to the reading list
pub async fn add(data_dir: &Path, query: &str, pick: usize) -> Result<()> {
    let client = CatalogClient::new();
    let books = client
        .search(query)
        .await
        .with_context(|| format!("Search failed for \"{}\"", query))?;

    if books.is_empty() {
        bail!("No results for \"{}\"", query);
    }
    if pick > books.len() {
        bail!(
            "Only {} result(s) for \"{}\", cannot pick #{}",
            books.len(),
            query,
            pick
        );
    }

    let book = books.into_iter().nth(pick - 1).expect("pick bounds checked");
    let store = super::open_store(data_dir).await;

    if store.is_book_saved(&book).await {
        println!("Already in your reading list: {}", super::describe(&book));
        return Ok(());
    }

    let line = super::describe(&book);
    store.add_book(book).await;
    println!("Saved: {}", line);
    Ok(())
}
