use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        chat::Persona,
        search::{SearchResult, SearchService},
        text,
    },
    error::{AppError, AppResult},
};

/// Query string for GET /api/search/*
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Response for GET /api/search/*. An empty result list carries a polite
/// message instead of an error.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct SearchController {
    search_service: Arc<SearchService>,
    persona: Arc<Persona>,
}

impl SearchController {
    pub fn new(search_service: Arc<SearchService>, persona: Arc<Persona>) -> Self {
        Self {
            search_service,
            persona,
        }
    }

    /// Queries are validated here, before the aggregator ever runs
    fn validated_query(query: &str) -> AppResult<String> {
        if !text::is_valid_query(query) {
            return Err(AppError::BadRequest(
                "Query must contain at least 2 significant characters".to_string(),
            ));
        }
        Ok(text::normalize(query))
    }

    fn respond(&self, results: Vec<SearchResult>) -> Json<SearchResponse> {
        let message = results
            .is_empty()
            .then(|| self.persona.nothing_found_reply());
        Json(SearchResponse { results, message })
    }

    /// GET /api/search/music - Aggregated music search
    pub async fn music(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SearchQuery>,
    ) -> AppResult<Json<SearchResponse>> {
        let query = Self::validated_query(&params.q)?;
        let results = controller.search_service.search_music(&query).await;
        Ok(controller.respond(results))
    }

    /// GET /api/search/movies - Aggregated movie search
    pub async fn movies(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SearchQuery>,
    ) -> AppResult<Json<SearchResponse>> {
        let query = Self::validated_query(&params.q)?;
        let results = controller.search_service.search_movies(&query).await;
        Ok(controller.respond(results))
    }
}
