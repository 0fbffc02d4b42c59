use super::search_provider::SearchProvider;
use super::ProviderError;
use crate::domain::search::{SearchResult, SearchSource};
use async_trait::async_trait;
use serde::Deserialize;

const SPOTIFY_SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const TRACK_LIMIT: u32 = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<Tracks>,
}

#[derive(Debug, Deserialize)]
struct Tracks {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    external_urls: ExternalUrls,
    album: Option<Album>,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
}

/// Secondary music catalog (Spotify track search)
pub struct SpotifySearchProvider {
    token: String,
    market: String,
    http_client: reqwest::Client,
}

impl SpotifySearchProvider {
    pub fn new(token: String, market: String, http_client: reqwest::Client) -> Self {
        Self {
            token,
            market,
            http_client,
        }
    }
}

#[async_trait]
impl SearchProvider for SpotifySearchProvider {
    fn source(&self) -> SearchSource {
        SearchSource::Spotify
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let hinted_query = format!("{} Persian Iranian", query);
        let limit = TRACK_LIMIT.to_string();
        let response = self
            .http_client
            .get(SPOTIFY_SEARCH_URL)
            .bearer_auth(&self.token)
            .query(&[
                ("q", hinted_query.as_str()),
                ("type", "track"),
                ("market", self.market.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("Spotify request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "Spotify returned status {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("Spotify response malformed: {}", e)))?;

        let items = body.tracks.map(|t| t.items).unwrap_or_default();

        let results = items
            .into_iter()
            .map(|track| {
                let artists: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();
                SearchResult {
                    title: track.name,
                    subtitle: (!artists.is_empty()).then(|| artists.join(", ")),
                    url: track.external_urls.spotify,
                    thumbnail: track.album.and_then(|a| a.images.into_iter().next()).map(|i| i.url),
                    source: SearchSource::Spotify,
                }
            })
            .collect();

        Ok(results)
    }
}
