use super::reply_provider::ReplyProvider;
use super::ProviderError;
use crate::domain::chat::{Persona, ResolutionPath};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Bounded output length for one reply
const MAX_OUTPUT_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Generative-AI reply provider backed by the Gemini `generateContent` API
pub struct GeminiReplyProvider {
    api_key: String,
    persona: Arc<Persona>,
    http_client: reqwest::Client,
}

impl GeminiReplyProvider {
    pub fn new(api_key: String, persona: Arc<Persona>, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            persona,
            http_client,
        }
    }
}

#[async_trait]
impl ReplyProvider for GeminiReplyProvider {
    fn resolution_path(&self) -> ResolutionPath {
        ResolutionPath::GenerativeAi
    }

    async fn attempt(&self, input: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: self.persona.chat_prompt(input),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http_client
            .post(GEMINI_API_URL)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::CallFailed(format!(
                "Gemini returned status {}",
                status
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CallFailed(format!("Gemini response malformed: {}", e)))?;

        let completion = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::CallFailed("Gemini returned an empty completion".to_string()))?;

        tracing::debug!(
            completion_length = completion.len(),
            "Gemini completion received"
        );

        Ok(completion)
    }
}
