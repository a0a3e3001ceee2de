//! Cover image links at the resolutions offered by the catalog

use serde::{Deserialize, Serialize};
use url::Url;

/// Cover links as delivered by the volumes API; any subset may be present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

impl ImageLinks {
    /// Pick the best available cover URL, largest resolution first.
    ///
    /// The catalog serves plain-http links and low zoom levels by default;
    /// links are upgraded to https and `zoom=1`/`zoom=2` is rewritten to
    /// `zoom=3`. Candidates that fail to parse as URLs are skipped.
    pub fn best_url(&self) -> Option<Url> {
        let candidates = [
            &self.extra_large,
            &self.large,
            &self.medium,
            &self.small,
            &self.thumbnail,
            &self.small_thumbnail,
        ];

        for link in candidates.into_iter().flatten() {
            let mut link = link.replace("http://", "https://");
            if link.contains("zoom=") {
                link = link.replace("zoom=1", "zoom=3");
                link = link.replace("zoom=2", "zoom=3");
            }
            if let Ok(url) = Url::parse(&link) {
                return Some(url);
            }
        }
        None
    }
}
