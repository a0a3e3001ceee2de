//! Recent-searches command implementation

use anyhow::Result;
use shelfmark_core::RecentSearches;
use std::path::Path;

/// Show or clear the recent search history
pub async fn recent(data_dir: &Path, clear: bool) -> Result<()> {
    let history = RecentSearches::open(super::backend(data_dir)).await;

    if clear {
        history.clear().await;
        println!("Recent searches cleared");
        return Ok(());
    }

    let terms = history.terms().await;
    if terms.is_empty() {
        println!("No recent searches");
        return Ok(());
    }
    for term in terms {
        println!("{}", term);
    }
    Ok(())
}
