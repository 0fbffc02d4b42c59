use super::speech_provider::SpeechProvider;
use super::ProviderError;
use crate::domain::speech::{SpeechSource, SynthesisRequest};
use async_trait::async_trait;
use serde::Serialize;

const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// Multilingual voice-cloning model; the fixed settings match the cloned
/// voice this assistant ships with.
const MODEL_ID: &str = "eleven_multilingual_v2";
const STABILITY: f32 = 0.5;
const SIMILARITY_BOOST: f32 = 0.5;

#[derive(Debug, Serialize)]
struct SynthesizeRequestBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// Premium voice-cloning provider (ElevenLabs)
pub struct ElevenLabsSpeechProvider {
    api_key: String,
    voice_id: String,
    http_client: reqwest::Client,
}

impl ElevenLabsSpeechProvider {
    pub fn new(api_key: String, voice_id: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            voice_id,
            http_client,
        }
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsSpeechProvider {
    fn source(&self) -> SpeechSource {
        SpeechSource::ElevenLabs
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/{}", ELEVENLABS_API_URL, self.voice_id);

        tracing::info!(
            voice_id = %self.voice_id,
            text_length = request.text.len(),
            "Calling ElevenLabs TTS API"
        );

        let body = SynthesizeRequestBody {
            text: &request.text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
            },
        };

        let response = self
            .http_client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("ElevenLabs request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "ElevenLabs returned status {}",
                status
            )));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("ElevenLabs body read failed: {}", e)))?
            .to_vec();

        tracing::debug!(
            audio_size = audio_bytes.len(),
            "ElevenLabs audio received successfully"
        );

        Ok(audio_bytes)
    }
}
