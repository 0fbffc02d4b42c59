use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::controllers::{
    chat::ChatController,
    health::{self, ReadyState},
    search::SearchController,
    speech::SpeechController,
};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Middleware to generate and attach a request ID to each request
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// Assemble the full application router. Split out from serving so tests
/// can drive the routes directly.
pub fn build_router(
    ready_state: Arc<ReadyState>,
    chat_controller: Arc<ChatController>,
    search_controller: Arc<SearchController>,
    speech_controller: Arc<SpeechController>,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(ready_state);

    let chat_routes = Router::new()
        .route("/api/chat", post(ChatController::talk))
        .route("/api/joke", get(ChatController::joke))
        .with_state(chat_controller);

    let search_routes = Router::new()
        .route("/api/search/music", get(SearchController::music))
        .route("/api/search/movies", get(SearchController::movies))
        .with_state(search_controller);

    let speech_routes = Router::new()
        .route("/api/speech/synthesize", post(SpeechController::synthesize))
        .with_state(speech_controller);

    Router::new()
        .merge(health_routes)
        .merge(chat_routes)
        .merge(search_routes)
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    host: &str,
    port: u16,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
