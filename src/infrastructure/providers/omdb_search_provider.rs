use super::search_provider::SearchProvider;
use super::ProviderError;
use crate::domain::search::{SearchResult, SearchSource, UNTITLED_PLACEHOLDER};
use async_trait::async_trait;
use serde::Deserialize;

const OMDB_API_URL: &str = "https://www.omdbapi.com/";
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<Entry>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

/// Secondary movie catalog (OMDB title search)
pub struct OmdbSearchProvider {
    api_key: String,
    http_client: reqwest::Client,
}

impl OmdbSearchProvider {
    pub fn new(api_key: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            http_client,
        }
    }
}

#[async_trait]
impl SearchProvider for OmdbSearchProvider {
    fn source(&self) -> SearchSource {
        SearchSource::Omdb
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let response = self
            .http_client
            .get(OMDB_API_URL)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("type", "movie"),
                ("r", "json"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("OMDB request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "OMDB returned status {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("OMDB response malformed: {}", e)))?;

        // OMDB reports "no matches" as a 200 with Response == "False"
        if body.response != "True" {
            tracing::warn!(
                error = body.error.as_deref().unwrap_or("unknown"),
                "OMDB returned no results"
            );
            return Ok(Vec::new());
        }

        let results = body
            .search
            .into_iter()
            .map(|entry| SearchResult {
                title: entry
                    .title
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED_PLACEHOLDER.to_string()),
                subtitle: entry.year.filter(|y| !y.is_empty()),
                url: entry
                    .imdb_id
                    .map(|id| format!("{}/{}/", IMDB_TITLE_URL, id)),
                thumbnail: entry.poster.filter(|p| p != "N/A"),
                source: SearchSource::Omdb,
            })
            .collect();

        Ok(results)
    }
}
