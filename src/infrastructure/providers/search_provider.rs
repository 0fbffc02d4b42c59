use super::ProviderError;
use crate::domain::search::{SearchResult, SearchSource};
use async_trait::async_trait;

/// One external content catalog.
///
/// Each implementation owns the field-by-field mapping from its vendor
/// response shape into `SearchResult`. The aggregator queries providers in
/// priority order; a failing provider simply contributes zero results.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn source(&self) -> SearchSource;

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;
}
