use super::search_provider::SearchProvider;
use super::ProviderError;
use crate::domain::search::{SearchResult, SearchSource};
use async_trait::async_trait;
use serde::Deserialize;

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const MAX_RESULTS_PER_CALL: u32 = 5;

/// Appended to every query to bias the catalog toward Persian music
const QUERY_HINT: &str = "آهنگ ایرانی Persian music";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Primary music catalog (YouTube Data API v3 search)
pub struct YoutubeSearchProvider {
    api_key: String,
    region_code: String,
    http_client: reqwest::Client,
}

impl YoutubeSearchProvider {
    pub fn new(api_key: String, region_code: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            region_code,
            http_client,
        }
    }
}

#[async_trait]
impl SearchProvider for YoutubeSearchProvider {
    fn source(&self) -> SearchSource {
        SearchSource::Youtube
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let hinted_query = format!("{} {}", query, QUERY_HINT);
        let max_results = MAX_RESULTS_PER_CALL.to_string();
        let response = self
            .http_client
            .get(YOUTUBE_SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", hinted_query.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
                ("regionCode", self.region_code.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("YouTube request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "YouTube returned status {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("YouTube response malformed: {}", e)))?;

        // Items without a video id (channels, playlists) are skipped
        let results = body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(SearchResult {
                    title: item.snippet.title,
                    subtitle: item.snippet.channel_title,
                    url: Some(format!("https://www.youtube.com/watch?v={}", video_id)),
                    thumbnail: item.snippet.thumbnails.and_then(|t| t.medium).map(|t| t.url),
                    source: SearchSource::Youtube,
                })
            })
            .collect();

        Ok(results)
    }
}
