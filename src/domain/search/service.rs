use super::model::SearchResult;
use crate::infrastructure::providers::SearchProvider;
use std::collections::HashSet;
use std::sync::Arc;

/// Hard cap on aggregated results per query
const MAX_RESULTS: usize = 10;

/// Aggregates heterogeneous content catalogs into one result list per
/// content type. Providers are queried sequentially in priority order;
/// per-provider failures are absorbed here and never reach the caller.
pub struct SearchService {
    music_providers: Vec<Arc<dyn SearchProvider>>,
    movie_providers: Vec<Arc<dyn SearchProvider>>,
}

impl SearchService {
    pub fn new(
        music_providers: Vec<Arc<dyn SearchProvider>>,
        movie_providers: Vec<Arc<dyn SearchProvider>>,
    ) -> Self {
        Self {
            music_providers,
            movie_providers,
        }
    }

    pub async fn search_music(&self, query: &str) -> Vec<SearchResult> {
        Self::aggregate(&self.music_providers, query).await
    }

    pub async fn search_movies(&self, query: &str) -> Vec<SearchResult> {
        Self::aggregate(&self.movie_providers, query).await
    }

    async fn aggregate(providers: &[Arc<dyn SearchProvider>], query: &str) -> Vec<SearchResult> {
        let mut all_results = Vec::new();

        for provider in providers {
            match provider.search(query).await {
                Ok(results) => {
                    tracing::debug!(
                        source = %provider.source(),
                        count = results.len(),
                        "Search provider returned results"
                    );
                    all_results.extend(results);
                }
                Err(err) => {
                    tracing::warn!(
                        source = %provider.source(),
                        error = %err,
                        "Search provider failed, continuing with the rest"
                    );
                }
            }
        }

        let mut unique = dedupe_by_title(all_results);
        unique.truncate(MAX_RESULTS);
        unique
    }
}

/// Remove duplicates by case-insensitive exact title, keeping the first
/// occurrence (stable, so provider-priority order decides the casing).
pub fn dedupe_by_title(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen_titles.insert(result.title.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SearchSource;
    use crate::infrastructure::providers::ProviderError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    fn result(title: &str, source: SearchSource) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            subtitle: None,
            url: None,
            thumbnail: None,
            source,
        }
    }

    struct StubProvider {
        source: SearchSource,
        results: Vec<SearchResult>,
        fail: bool,
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        fn source(&self) -> SearchSource {
            self.source
        }

        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ProviderError> {
            if self.fail {
                return Err(ProviderError::CallFailed("boom".to_string()));
            }
            Ok(self.results.clone())
        }
    }

    fn stub(source: SearchSource, titles: &[&str]) -> Arc<dyn SearchProvider> {
        Arc::new(StubProvider {
            source,
            results: titles.iter().map(|t| result(t, source)).collect(),
            fail: false,
        })
    }

    fn failing(source: SearchSource) -> Arc<dyn SearchProvider> {
        Arc::new(StubProvider {
            source,
            results: Vec::new(),
            fail: true,
        })
    }

    #[test]
    fn test_dedupe_keeps_first_casing() {
        let results = vec![
            result("Song A", SearchSource::Youtube),
            result("SONG A", SearchSource::Spotify),
            result("Song B", SearchSource::Spotify),
        ];
        let deduped = dedupe_by_title(results);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "Song A");
        assert_eq!(deduped[0].source, SearchSource::Youtube);
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let results = vec![
            result("Alpha", SearchSource::Youtube),
            result("Beta", SearchSource::Spotify),
        ];
        let once = dedupe_by_title(results);
        let titles_once: Vec<_> = once.iter().map(|r| r.title.clone()).collect();
        let twice = dedupe_by_title(once);
        let titles_twice: Vec<_> = twice.iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles_once, titles_twice);
    }

    #[tokio::test]
    async fn test_aggregate_preserves_provider_priority_order() {
        let service = SearchService::new(
            vec![
                stub(SearchSource::Youtube, &["One", "Two"]),
                stub(SearchSource::Spotify, &["Three"]),
            ],
            Vec::new(),
        );
        let results = service.search_music("query").await;
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_aggregate_caps_at_ten_results() {
        let many: Vec<String> = (0..8).map(|i| format!("yt-{i}")).collect();
        let many_refs: Vec<&str> = many.iter().map(|s| s.as_str()).collect();
        let more: Vec<String> = (0..8).map(|i| format!("sp-{i}")).collect();
        let more_refs: Vec<&str> = more.iter().map(|s| s.as_str()).collect();

        let service = SearchService::new(
            vec![
                stub(SearchSource::Youtube, &many_refs),
                stub(SearchSource::Spotify, &more_refs),
            ],
            Vec::new(),
        );
        let results = service.search_music("query").await;
        assert_eq!(results.len(), 10);
    }

    #[tokio::test]
    async fn test_failed_provider_contributes_zero_results() {
        let service = SearchService::new(
            vec![
                failing(SearchSource::Youtube),
                stub(SearchSource::Spotify, &["Still here"]),
            ],
            Vec::new(),
        );
        let results = service.search_music("query").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Still here");
    }

    #[tokio::test]
    async fn test_cross_provider_duplicates_keep_first_provider() {
        let service = SearchService::new(
            vec![
                stub(SearchSource::Youtube, &["Song A"]),
                stub(SearchSource::Spotify, &["song a"]),
            ],
            Vec::new(),
        );
        let results = service.search_music("query").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Song A");
        assert_eq!(results[0].source, SearchSource::Youtube);
    }

    #[tokio::test]
    async fn test_empty_chain_yields_no_results() {
        let service = SearchService::new(Vec::new(), Vec::new());
        assert!(service.search_movies("query").await.is_empty());
    }
}
