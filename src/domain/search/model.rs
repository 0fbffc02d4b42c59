use serde::{Deserialize, Serialize};

/// Title used when a provider returns an item without one
pub const UNTITLED_PLACEHOLDER: &str = "نامشخص";

/// Which catalog a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Youtube,
    Spotify,
    Tmdb,
    Omdb,
}

impl SearchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::Youtube => "youtube",
            SearchSource::Spotify => "spotify",
            SearchSource::Tmdb => "tmdb",
            SearchSource::Omdb => "omdb",
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized search hit. Providers with richer shapes map down to
/// this; the aggregator never sees provider-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub source: SearchSource,
}
