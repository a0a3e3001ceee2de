//! Recent search history, capped and deduplicated

use crate::storage::StorageBackend;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fixed storage key for the persisted search history
pub const RECENT_SEARCHES_KEY: &str = "recent_searches.json";

/// Maximum number of terms kept in the history
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Most-recent-first list of search terms, persisted on every change
pub struct RecentSearches {
    backend: Arc<dyn StorageBackend>,
    terms: RwLock<Vec<String>>,
}

impl RecentSearches {
    /// Open the history; absent or corrupt data yields an empty history
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let terms = match backend.read(RECENT_SEARCHES_KEY).await {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_else(|e| {
                tracing::warn!("discarding unreadable search history: {}", e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };
        Self {
            backend,
            terms: RwLock::new(terms),
        }
    }

    /// Record a search term at the front of the history.
    ///
    /// The term is trimmed; empty terms are ignored. A case-insensitive
    /// duplicate elsewhere in the history is removed first, and the history
    /// is truncated to [`MAX_RECENT_SEARCHES`].
    pub async fn add(&self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return;
        }
        let mut terms = self.terms.write().await;
        let lowered = trimmed.to_lowercase();
        terms.retain(|t| t.to_lowercase() != lowered);
        terms.insert(0, trimmed.to_string());
        terms.truncate(MAX_RECENT_SEARCHES);
        self.persist(&terms).await;
    }

    /// Remove a term (case-insensitive); no-op if absent
    pub async fn remove(&self, term: &str) {
        let mut terms = self.terms.write().await;
        let before = terms.len();
        let lowered = term.to_lowercase();
        terms.retain(|t| t.to_lowercase() != lowered);
        if terms.len() != before {
            self.persist(&terms).await;
        }
    }

    /// Clear the whole history
    pub async fn clear(&self) {
        let mut terms = self.terms.write().await;
        terms.clear();
        self.persist(&terms).await;
    }

    /// Snapshot of the history, most recent first
    pub async fn terms(&self) -> Vec<String> {
        self.terms.read().await.clone()
    }

    async fn persist(&self, terms: &[String]) {
        let data = match serde_json::to_vec_pretty(terms) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("failed to encode search history: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(RECENT_SEARCHES_KEY, data).await {
            tracing::warn!("failed to persist search history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    async fn history() -> RecentSearches {
        RecentSearches::open(Arc::new(MemoryStorage::new())).await
    }

    #[tokio::test]
    async fn test_most_recent_first() {
        let h = history().await;
        h.add("dune").await;
        h.add("hyperion").await;
        assert_eq!(h.terms().await, vec!["hyperion", "dune"]);
    }

    #[tokio::test]
    async fn test_case_insensitive_dedup() {
        let h = history().await;
        h.add("Dune").await;
        h.add("hyperion").await;
        h.add("dune").await;
        assert_eq!(h.terms().await, vec!["dune", "hyperion"]);
    }

    #[tokio::test]
    async fn test_trims_and_ignores_empty() {
        let h = history().await;
        h.add("  dune  ").await;
        h.add("   ").await;
        assert_eq!(h.terms().await, vec!["dune"]);
    }

    #[tokio::test]
    async fn test_capped_at_max() {
        let h = history().await;
        for i in 0..15 {
            h.add(&format!("term {}", i)).await;
        }
        let terms = h.terms().await;
        assert_eq!(terms.len(), MAX_RECENT_SEARCHES);
        assert_eq!(terms[0], "term 14");
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let h = history().await;
        h.add("dune").await;
        h.add("hyperion").await;
        h.remove("DUNE").await;
        assert_eq!(h.terms().await, vec!["hyperion"]);
        h.clear().await;
        assert!(h.terms().await.is_empty());
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let backend = Arc::new(MemoryStorage::new());
        let h = RecentSearches::open(backend.clone()).await;
        h.add("dune").await;
        drop(h);

        let h = RecentSearches::open(backend).await;
        assert_eq!(h.terms().await, vec!["dune"]);
    }
}
