use super::search_provider::SearchProvider;
use super::ProviderError;
use crate::domain::search::{SearchResult, SearchSource, UNTITLED_PLACEHOLDER};
use async_trait::async_trait;
use serde::Deserialize;

const TMDB_SEARCH_URL: &str = "https://api.themoviedb.org/3/search/movie";
const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie";
const TMDB_POSTER_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct Movie {
    id: i64,
    title: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
}

/// Primary movie catalog (TMDB movie search)
pub struct TmdbSearchProvider {
    api_key: String,
    language: String,
    region: String,
    http_client: reqwest::Client,
}

impl TmdbSearchProvider {
    pub fn new(
        api_key: String,
        language: String,
        region: String,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            api_key,
            language,
            region,
            http_client,
        }
    }
}

#[async_trait]
impl SearchProvider for TmdbSearchProvider {
    fn source(&self) -> SearchSource {
        SearchSource::Tmdb
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let response = self
            .http_client
            .get(TMDB_SEARCH_URL)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("language", self.language.as_str()),
                ("region", self.region.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("TMDB request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "TMDB returned status {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("TMDB response malformed: {}", e)))?;

        let results = body
            .results
            .into_iter()
            .map(|movie| SearchResult {
                title: movie
                    .title
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED_PLACEHOLDER.to_string()),
                subtitle: movie.release_date.filter(|d| !d.is_empty()),
                url: Some(format!("{}/{}", TMDB_MOVIE_URL, movie.id)),
                thumbnail: movie
                    .poster_path
                    .map(|p| format!("{}{}", TMDB_POSTER_URL, p)),
                source: SearchSource::Tmdb,
            })
            .collect();

        Ok(results)
    }
}
