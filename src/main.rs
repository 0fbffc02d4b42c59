use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hamdam_backend::controllers::chat::ChatController;
use hamdam_backend::controllers::health::ReadyState;
use hamdam_backend::controllers::search::SearchController;
use hamdam_backend::controllers::speech::SpeechController;
use hamdam_backend::domain::chat::{ChatService, Persona};
use hamdam_backend::domain::search::SearchService;
use hamdam_backend::domain::speech::{ArtifactStore, SpeechService};
use hamdam_backend::infrastructure::config::{Config, LogFormat};
use hamdam_backend::infrastructure::http::{build_router, start_http_server};
use hamdam_backend::infrastructure::providers::{
    ElevenLabsSpeechProvider, GeminiReplyProvider, OmdbSearchProvider, PatternReplyProvider,
    ReplyProvider, SearchProvider, SpeechProvider, SpotifySearchProvider, TemplateReplyProvider,
    TmdbSearchProvider, TranslateSpeechProvider, YoutubeSearchProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing baseline credential refuses startup
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting hamdam backend on {}:{}",
        config.host,
        config.port
    );
    if config.is_development() {
        tracing::warn!("Running in development mode");
    }

    // Temp audio artifact store, shared by synthesis and the sweeper
    let artifact_store = ArtifactStore::new(config.temp_audio_dir.clone())?;
    tracing::info!(
        dir = %artifact_store.dir().display(),
        "Audio artifact store ready"
    );

    // Per-concern HTTP clients with fixed timeouts
    let chat_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.chat_timeout_secs))
        .build()?;
    let search_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.search_timeout_secs))
        .build()?;
    let speech_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.speech_timeout_secs))
        .build()?;

    let persona = Arc::new(Persona::new(
        config.assistant_name.clone(),
        config.companion_name.clone(),
    ));

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Reply provider chain (strict priority, first success wins)
    let mut reply_providers: Vec<Arc<dyn ReplyProvider>> = Vec::new();
    if config.has_gemini_api() {
        tracing::info!("Generative chat enabled (Gemini)");
        reply_providers.push(Arc::new(GeminiReplyProvider::new(
            config.gemini_api_key.clone().unwrap_or_default(),
            persona.clone(),
            chat_client,
        )));
    } else {
        tracing::warn!("No well-formed Gemini key configured, chat runs on patterns only");
    }
    reply_providers.push(Arc::new(PatternReplyProvider::new(persona.clone())));
    reply_providers.push(Arc::new(TemplateReplyProvider::new(persona.clone())));

    // 2. Speech provider chain (voice cloning first, generic TTS fallback)
    let mut speech_providers: Vec<Arc<dyn SpeechProvider>> = Vec::new();
    if config.has_voice_cloning() {
        tracing::info!("Voice cloning enabled (ElevenLabs)");
        speech_providers.push(Arc::new(ElevenLabsSpeechProvider::new(
            config.elevenlabs_api_key.clone().unwrap_or_default(),
            config.elevenlabs_voice_id.clone().unwrap_or_default(),
            speech_client,
        )));
    }
    speech_providers.push(Arc::new(TranslateSpeechProvider::new(Duration::from_secs(
        config.speech_timeout_secs,
    ))));

    // 3. Search provider chains (priority order decides merge order)
    let mut music_providers: Vec<Arc<dyn SearchProvider>> = vec![Arc::new(
        YoutubeSearchProvider::new(
            config.youtube_api_key.clone(),
            config.search_region.clone(),
            search_client.clone(),
        ),
    )];
    if let Some(token) = config.spotify_token.clone() {
        music_providers.push(Arc::new(SpotifySearchProvider::new(
            token,
            config.search_region.clone(),
            search_client.clone(),
        )));
    }

    let mut movie_providers: Vec<Arc<dyn SearchProvider>> = Vec::new();
    if let Some(api_key) = config.tmdb_api_key.clone() {
        movie_providers.push(Arc::new(TmdbSearchProvider::new(
            api_key,
            config.search_language.clone(),
            config.search_region.clone(),
            search_client.clone(),
        )));
    }
    if let Some(api_key) = config.omdb_api_key.clone() {
        movie_providers.push(Arc::new(OmdbSearchProvider::new(api_key, search_client)));
    }

    let ready_state = Arc::new(ReadyState {
        generative_chat: config.has_gemini_api(),
        voice_cloning: config.has_voice_cloning(),
        music_search: !music_providers.is_empty(),
        movie_search: !movie_providers.is_empty(),
    });

    // 4. Services
    let chat_service = Arc::new(ChatService::new(reply_providers, persona.clone()));
    let search_service = Arc::new(SearchService::new(music_providers, movie_providers));
    let speech_service = Arc::new(SpeechService::new(
        speech_providers,
        artifact_store.clone(),
        config.speech_language.clone(),
        config.speech_slow,
    ));

    // 5. Controllers
    let chat_controller = Arc::new(ChatController::new(chat_service));
    let search_controller = Arc::new(SearchController::new(search_service, persona));
    let speech_controller = Arc::new(SpeechController::new(speech_service));

    // Periodic sweep of audio artifacts the delivery path left behind
    let sweeper_store = artifact_store;
    let max_age = chrono::Duration::hours(config.artifact_max_age_hours);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60 * 60));
        loop {
            interval.tick().await;
            match sweeper_store.sweep_older_than(max_age).await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "Swept old audio artifacts"),
                Err(err) => tracing::warn!(error = %err, "Artifact sweep failed"),
            }
        }
    });

    let router = build_router(
        ready_state,
        chat_controller,
        search_controller,
        speech_controller,
    );

    start_http_server(&config.host, config.port, router).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hamdam_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hamdam_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
