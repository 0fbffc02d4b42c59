// Router-level tests driving the real routes with stub providers, so no
// network access or credentials are needed.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tower::ServiceExt;

use hamdam_backend::controllers::chat::ChatController;
use hamdam_backend::controllers::health::ReadyState;
use hamdam_backend::controllers::search::SearchController;
use hamdam_backend::controllers::speech::SpeechController;
use hamdam_backend::domain::chat::{ChatService, Persona, ResolutionPath};
use hamdam_backend::domain::search::{SearchResult, SearchService, SearchSource};
use hamdam_backend::domain::speech::{ArtifactStore, SpeechService, SpeechSource, SynthesisRequest};
use hamdam_backend::infrastructure::http::build_router;
use hamdam_backend::infrastructure::providers::{
    PatternReplyProvider, ProviderError, ReplyProvider, SearchProvider, SpeechProvider,
    TemplateReplyProvider,
};

struct FailingReplyProvider;

#[async_trait]
impl ReplyProvider for FailingReplyProvider {
    fn resolution_path(&self) -> ResolutionPath {
        ResolutionPath::GenerativeAi
    }

    async fn attempt(&self, _input: &str) -> Result<String, ProviderError> {
        Err(ProviderError::CallFailed("upstream timed out".to_string()))
    }
}

struct StubSearchProvider {
    source: SearchSource,
    titles: Vec<String>,
}

#[async_trait]
impl SearchProvider for StubSearchProvider {
    fn source(&self) -> SearchSource {
        self.source
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        Ok(self
            .titles
            .iter()
            .map(|title| SearchResult {
                title: title.clone(),
                subtitle: None,
                url: None,
                thumbnail: None,
                source: self.source,
            })
            .collect())
    }
}

struct StubSpeechProvider {
    source: SpeechSource,
    audio: Option<Vec<u8>>,
}

#[async_trait]
impl SpeechProvider for StubSpeechProvider {
    fn source(&self) -> SpeechSource {
        self.source
    }

    async fn synthesize(&self, _request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError> {
        self.audio
            .clone()
            .ok_or_else(|| ProviderError::CallFailed("HTTP 500".to_string()))
    }
}

struct TestApp {
    router: Router,
    // Keeps the artifact dir alive for the duration of the test
    _artifact_dir: tempfile::TempDir,
}

fn test_app(
    reply_providers: Vec<Arc<dyn ReplyProvider>>,
    music_providers: Vec<Arc<dyn SearchProvider>>,
    speech_providers: Vec<Arc<dyn SpeechProvider>>,
) -> TestApp {
    let artifact_dir = tempfile::tempdir().unwrap();
    let persona = Arc::new(Persona::new("امیر", "بهنوش"));

    let chat_service = Arc::new(ChatService::with_seed(reply_providers, persona.clone(), 1));
    let search_service = Arc::new(SearchService::new(music_providers, Vec::new()));
    let speech_service = Arc::new(SpeechService::new(
        speech_providers,
        ArtifactStore::new(artifact_dir.path()).unwrap(),
        "fa".to_string(),
        false,
    ));

    let ready_state = Arc::new(ReadyState {
        generative_chat: false,
        voice_cloning: false,
        music_search: true,
        movie_search: false,
    });

    let router = build_router(
        ready_state,
        Arc::new(ChatController::new(chat_service)),
        Arc::new(SearchController::new(search_service, persona)),
        Arc::new(SpeechController::new(speech_service)),
    );

    TestApp {
        router,
        _artifact_dir: artifact_dir,
    }
}

fn default_reply_chain() -> Vec<Arc<dyn ReplyProvider>> {
    let persona = Arc::new(Persona::new("امیر", "بهنوش"));
    vec![
        Arc::new(FailingReplyProvider),
        Arc::new(PatternReplyProvider::with_seed(persona.clone(), 1)),
        Arc::new(TemplateReplyProvider::with_seed(persona, 1)),
    ]
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok_with_request_id() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn health_ready_reports_capabilities() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["capabilities"]["music_search"], true);
    assert_eq!(body["capabilities"]["generative_chat"], false);
}

#[tokio::test]
async fn chat_movie_request_resolves_via_pattern_match() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(json_request(
            "/api/chat",
            serde_json::json!({"text": "فیلم خوب معرفی کن"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["resolution_path"], "pattern_match");

    let persona = Persona::new("امیر", "بهنوش");
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("بهنوش"));
    assert!(persona
        .movie_suggestions
        .iter()
        .any(|s| reply.contains(s.as_str())));
}

#[tokio::test]
async fn chat_rejects_empty_text() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(json_request("/api/chat", serde_json::json!({"text": "  "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_rejects_oversized_text() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());
    let text = "ب".repeat(5000);

    let response = app
        .router
        .oneshot(json_request("/api/chat", serde_json::json!({ "text": text })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn joke_is_addressed_to_companion() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/joke")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["joke"].as_str().unwrap().contains("بهنوش"));
}

#[tokio::test]
async fn search_deduplicates_and_caps_results() {
    let youtube_titles: Vec<String> = (0..8).map(|i| format!("Track {i}")).collect();
    let mut spotify_titles: Vec<String> = vec!["TRACK 0".to_string(), "TRACK 1".to_string()];
    spotify_titles.extend((8..16).map(|i| format!("Track {i}")));

    let app = test_app(
        default_reply_chain(),
        vec![
            Arc::new(StubSearchProvider {
                source: SearchSource::Youtube,
                titles: youtube_titles,
            }),
            Arc::new(StubSearchProvider {
                source: SearchSource::Spotify,
                titles: spotify_titles,
            }),
        ],
        Vec::new(),
    );

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/search/music?q=%D8%AF%DB%8C%D8%B1%D9%87")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body["results"].as_array().unwrap();

    // Capped at 10, duplicates keep the first provider's casing
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["title"], "Track 0");
    assert_eq!(results[0]["source"], "youtube");
    let track_zero_count = results
        .iter()
        .filter(|r| r["title"].as_str().unwrap().eq_ignore_ascii_case("track 0"))
        .count();
    assert_eq!(track_zero_count, 1);
}

#[tokio::test]
async fn search_rejects_short_query() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/search/music?q=a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_with_no_results_is_polite_not_an_error() {
    let app = test_app(default_reply_chain(), Vec::new(), Vec::new());

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/search/music?q=%D8%AF%DB%8C%D8%B1%D9%87")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["results"].as_array().unwrap().is_empty());
    assert!(body["message"].as_str().unwrap().contains("بهنوش"));
}

#[tokio::test]
async fn speech_falls_back_to_generic_provider() {
    let app = test_app(
        default_reply_chain(),
        Vec::new(),
        vec![
            Arc::new(StubSpeechProvider {
                source: SpeechSource::ElevenLabs,
                audio: None,
            }),
            Arc::new(StubSpeechProvider {
                source: SpeechSource::GoogleTranslate,
                audio: Some(b"mp3-bytes".to_vec()),
            }),
        ],
    );

    let response = app
        .router
        .oneshot(json_request(
            "/api/speech/synthesize",
            serde_json::json!({"text": "سلام"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-provider-used").unwrap(),
        "google_translate"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/mpeg"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"mp3-bytes");
}

#[tokio::test]
async fn speech_rejects_empty_text_and_reports_chain_misses() {
    let app = test_app(
        default_reply_chain(),
        Vec::new(),
        vec![Arc::new(StubSpeechProvider {
            source: SpeechSource::GoogleTranslate,
            audio: None,
        })],
    );

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "/api/speech/synthesize",
            serde_json::json!({"text": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .router
        .oneshot(json_request(
            "/api/speech/synthesize",
            serde_json::json!({"text": "سلام"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
