use super::speech_provider::SpeechProvider;
use super::ProviderError;
use crate::domain::speech::{SpeechSource, SynthesisRequest};
use async_trait::async_trait;
use std::time::Duration;

const TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The translate endpoint rejects long inputs; chunks above this size come
/// back truncated.
const MAX_CHUNK_CHARS: usize = 200;

/// Generic multi-language TTS via the Google Translate speech endpoint.
///
/// The underlying call is a plain blocking HTTP fetch per text chunk, so
/// the whole synthesis runs on the runtime's blocking pool and is joined
/// by the async caller; request-handling threads are never stalled.
pub struct TranslateSpeechProvider {
    timeout: Duration,
}

impl TranslateSpeechProvider {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Split text into chunks of at most `MAX_CHUNK_CHARS` characters,
/// breaking on word boundaries; a single oversized word is split by
/// characters.
fn split_into_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    let push_current = |current: &mut String, current_chars: &mut usize, chunks: &mut Vec<String>| {
        if !current.is_empty() {
            chunks.push(std::mem::take(current));
            *current_chars = 0;
        }
    };

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if word_chars > MAX_CHUNK_CHARS {
            push_current(&mut current, &mut current_chars, &mut chunks);
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(MAX_CHUNK_CHARS) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        // +1 for the joining space
        if current_chars > 0 && current_chars + 1 + word_chars > MAX_CHUNK_CHARS {
            push_current(&mut current, &mut current_chars, &mut chunks);
        }

        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    push_current(&mut current, &mut current_chars, &mut chunks);
    chunks
}

fn chunk_url(chunk: &str, language: &str, slow: bool) -> String {
    let speed = if slow { "0.3" } else { "1" };
    format!(
        "{}?ie=UTF-8&client=tw-ob&tl={}&ttsspeed={}&q={}",
        TRANSLATE_TTS_URL,
        urlencoding::encode(language),
        speed,
        urlencoding::encode(chunk)
    )
}

/// Fetch every chunk sequentially and merge the MP3 bytes in order.
/// Runs on a blocking thread.
fn fetch_chunks(
    chunks: Vec<String>,
    language: String,
    slow: bool,
    timeout: Duration,
) -> Result<Vec<u8>, ProviderError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::CallFailed(format!("TTS client build failed: {}", e)))?;

    let mut merged_audio = Vec::new();

    for (index, chunk) in chunks.iter().enumerate() {
        let response = client
            .get(chunk_url(chunk, &language, slow))
            .send()
            .map_err(|e| {
                ProviderError::CallFailed(format!("translate TTS request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "translate TTS returned status {} for chunk {}",
                status, index
            )));
        }

        let audio = response.bytes().map_err(|e| {
            ProviderError::CallFailed(format!("translate TTS body read failed: {}", e))
        })?;
        merged_audio.extend_from_slice(&audio);
    }

    Ok(merged_audio)
}

#[async_trait]
impl SpeechProvider for TranslateSpeechProvider {
    fn source(&self) -> SpeechSource {
        SpeechSource::GoogleTranslate
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError> {
        let chunks = split_into_chunks(&request.text);

        tracing::info!(
            language = %request.language,
            slow = request.slow,
            chunk_count = chunks.len(),
            text_length = request.text.len(),
            "Starting translate TTS synthesis"
        );

        let language = request.language.clone();
        let slow = request.slow;
        let timeout = self.timeout;

        let audio = tokio::task::spawn_blocking(move || fetch_chunks(chunks, language, slow, timeout))
            .await
            .map_err(|e| ProviderError::CallFailed(format!("TTS worker task failed: {}", e)))??;

        tracing::debug!(audio_size = audio.len(), "Translate TTS audio merged");

        Ok(audio)
    }
}
