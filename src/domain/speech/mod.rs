pub mod artifact;
pub mod service;

pub use artifact::{ArtifactStore, AudioArtifact};
pub use service::SpeechService;

use serde::{Deserialize, Serialize};

/// Which synthesis engine produced an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechSource {
    ElevenLabs,
    GoogleTranslate,
}

impl SpeechSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechSource::ElevenLabs => "elevenlabs",
            SpeechSource::GoogleTranslate => "google_translate",
        }
    }
}

impl std::fmt::Display for SpeechSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One synthesis request as seen by a provider. By the time a provider
/// receives it, `text` is guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
    pub slow: bool,
}

/// Outcome of a successful synthesis. The artifact is owned by the caller,
/// who is responsible for removing it once delivered.
#[derive(Debug)]
pub struct SynthesisResult {
    pub artifact: AudioArtifact,
    pub provider: SpeechSource,
}
