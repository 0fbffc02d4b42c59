use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::MAX_MESSAGE_CHARS;
use crate::{
    domain::speech::SpeechService,
    error::{AppError, AppResult},
};

pub const X_PROVIDER_USED: &str = "x-provider-used";

/// Request for POST /api/speech/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
}

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/speech/synthesize - Convert text to speech.
    ///
    /// Streams the MP3 bytes back and releases the temporary artifact once
    /// it has been read; a synthesis miss across the whole chain comes
    /// back as a friendly 503, not a trace.
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }
        if request.text.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {} characters or less",
                MAX_MESSAGE_CHARS
            )));
        }

        let result = controller
            .speech_service
            .synthesize(&request.text)
            .await
            .ok_or_else(|| {
                AppError::ServiceUnavailable(
                    "فعلاً نمی‌تونم پیام صوتی بسازم، یه کم دیگه دوباره امتحان کن! 🙏".to_string(),
                )
            })?;

        let audio = result
            .artifact
            .read()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read audio artifact: {}", e)))?;

        // The artifact is ours once the bytes are in memory
        if let Err(err) = result.artifact.remove().await {
            tracing::warn!(error = %err, "Could not remove delivered audio artifact");
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            X_PROVIDER_USED,
            result.provider.as_str().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }
}
