//! Search command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use shelfmark_core::{CatalogClient, RecentSearches};
use std::path::Path;
use std::time::Duration;

/// Search the catalog and print the results
pub async fn search(data_dir: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Searching for \"{}\"...", query));

    let client = CatalogClient::new();
    let books = client
        .search(query)
        .await
        .with_context(|| format!("Search failed for \"{}\"", query))?;

    pb.finish_and_clear();
    tracing::debug!("{} result(s) for {:?}", books.len(), query);

    // Record the term only once the search has succeeded
    let history = RecentSearches::open(super::backend(data_dir)).await;
    history.add(query).await;

    let books = &books[..books.len().min(limit)];

    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    for (n, book) in books.iter().enumerate() {
        println!("{:2}. {}", n + 1, super::describe(book));
        println!("    id: {}", book.id);
    }
    Ok(())
}
