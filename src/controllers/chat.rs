use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::MAX_MESSAGE_CHARS;
use crate::{
    domain::chat::{ChatService, ResolutionPath},
    domain::text,
    error::{AppError, AppResult},
};

/// Request for POST /api/chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response for POST /api/chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub resolution_path: ResolutionPath,
}

/// Response for GET /api/joke
#[derive(Debug, Serialize, Deserialize)]
pub struct JokeResponse {
    pub joke: String,
}

pub struct ChatController {
    chat_service: Arc<ChatService>,
}

impl ChatController {
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }

    /// POST /api/chat - Resolve a reply for an inbound message
    pub async fn talk(
        State(controller): State<Arc<ChatController>>,
        Json(request): Json<ChatRequest>,
    ) -> AppResult<Json<ChatResponse>> {
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }
        if request.text.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {} characters or less",
                MAX_MESSAGE_CHARS
            )));
        }

        let turn = controller.chat_service.resolve(&request.text).await;

        Ok(Json(ChatResponse {
            // Outbound replies are clamped to the transport limit too
            reply: text::truncate(&turn.reply, MAX_MESSAGE_CHARS),
            resolution_path: turn.path,
        }))
    }

    /// GET /api/joke - A random canned joke
    pub async fn joke(
        State(controller): State<Arc<ChatController>>,
    ) -> AppResult<Json<JokeResponse>> {
        Ok(Json(JokeResponse {
            joke: controller.chat_service.tell_joke(),
        }))
    }
}
