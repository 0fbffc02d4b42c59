use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Which optional provider capabilities were configured at startup
#[derive(Debug, Clone, Serialize)]
pub struct ReadyState {
    pub generative_chat: bool,
    pub voice_cloning: bool,
    pub music_search: bool,
    pub movie_search: bool,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(state): State<Arc<ReadyState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "capabilities": &*state,
        })),
    )
}
