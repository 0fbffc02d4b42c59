use super::artifact::ArtifactStore;
use super::{SynthesisRequest, SynthesisResult};
use crate::infrastructure::providers::SpeechProvider;
use std::sync::Arc;

/// Converts reply text into a temporary audio artifact, trying the
/// configured providers in priority order. Every failure is absorbed
/// here: `None` means "no audio available, send text only".
pub struct SpeechService {
    providers: Vec<Arc<dyn SpeechProvider>>,
    store: ArtifactStore,
    language: String,
    slow: bool,
}

impl SpeechService {
    pub fn new(
        providers: Vec<Arc<dyn SpeechProvider>>,
        store: ArtifactStore,
        language: String,
        slow: bool,
    ) -> Self {
        Self {
            providers,
            store,
            language,
            slow,
        }
    }

    /// Synthesize `text` to an audio artifact.
    ///
    /// Empty or whitespace-only text short-circuits to `None` before any
    /// provider is consulted. Each provider is attempted at most once; the
    /// first one to produce audio wins.
    pub async fn synthesize(&self, text: &str) -> Option<SynthesisResult> {
        if text.trim().is_empty() {
            tracing::debug!("Skipping synthesis of empty text");
            return None;
        }

        let request = SynthesisRequest {
            text: text.to_string(),
            language: self.language.clone(),
            slow: self.slow,
        };

        for provider in &self.providers {
            match provider.synthesize(&request).await {
                Ok(audio) => match self.store.create(&audio).await {
                    Ok(artifact) => {
                        tracing::info!(
                            provider = %provider.source(),
                            audio_size = audio.len(),
                            path = %artifact.path().display(),
                            "Speech synthesized"
                        );
                        return Some(SynthesisResult {
                            artifact,
                            provider: provider.source(),
                        });
                    }
                    Err(err) => {
                        tracing::warn!(
                            provider = %provider.source(),
                            error = %err,
                            "Failed to persist audio artifact, trying next provider"
                        );
                    }
                },
                Err(err) => {
                    tracing::warn!(
                        provider = %provider.source(),
                        error = %err,
                        "Speech provider failed, trying next provider"
                    );
                }
            }
        }

        tracing::warn!("All speech providers failed, replying text-only");
        None
    }
}
