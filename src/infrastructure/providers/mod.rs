pub mod elevenlabs_speech_provider;
pub mod gemini_reply_provider;
pub mod omdb_search_provider;
pub mod pattern_reply_provider;
pub mod reply_provider;
pub mod search_provider;
pub mod speech_provider;
pub mod spotify_search_provider;
pub mod template_reply_provider;
pub mod tmdb_search_provider;
pub mod translate_speech_provider;
pub mod youtube_search_provider;

pub use elevenlabs_speech_provider::ElevenLabsSpeechProvider;
pub use gemini_reply_provider::GeminiReplyProvider;
pub use omdb_search_provider::OmdbSearchProvider;
pub use pattern_reply_provider::PatternReplyProvider;
pub use reply_provider::ReplyProvider;
pub use search_provider::SearchProvider;
pub use speech_provider::SpeechProvider;
pub use spotify_search_provider::SpotifySearchProvider;
pub use template_reply_provider::TemplateReplyProvider;
pub use tmdb_search_provider::TmdbSearchProvider;
pub use translate_speech_provider::TranslateSpeechProvider;
pub use youtube_search_provider::YoutubeSearchProvider;

/// Why a single provider attempt produced nothing. Absorbed at the owning
/// service boundary; never visible to end users.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider call failed: {0}")]
    CallFailed(String),
}
