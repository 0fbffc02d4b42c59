use super::ProviderError;
use crate::domain::speech::{SpeechSource, SynthesisRequest};
use async_trait::async_trait;

/// One speech-synthesis capability (voice cloning, generic TTS, ...).
///
/// Implementations return raw MP3 bytes; artifact persistence is the
/// owning service's job. Each provider is attempted at most once per
/// request - an `Err` hands the request to the next provider in the chain.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Tag recorded on the `SynthesisResult` when this provider wins
    fn source(&self) -> SpeechSource;

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError>;
}
