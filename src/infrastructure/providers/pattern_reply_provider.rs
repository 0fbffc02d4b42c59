use super::reply_provider::ReplyProvider;
use super::ProviderError;
use crate::domain::chat::{Persona, ResolutionPath, TemplatePicker};
use async_trait::async_trait;
use std::sync::Arc;

/// Keyword-bucket reply provider. Buckets are checked in a fixed order;
/// the first bucket with a keyword hit wins.
pub struct PatternReplyProvider {
    persona: Arc<Persona>,
    picker: TemplatePicker,
}

const MOVIE_KEYWORDS: &[&str] = &["فیلم", "سینما", "movie"];
const MUSIC_KEYWORDS: &[&str] = &["آهنگ", "موزیک", "music"];
const GREETING_KEYWORDS: &[&str] = &["سلام", "درود", "hello"];
const WELL_BEING_KEYWORDS: &[&str] = &["چطوری", "حالت", "خوبی"];
const AFFECTION_KEYWORDS: &[&str] = &["دوست دارم", "عاشقتم", "love"];
const QUESTION_KEYWORDS: &[&str] = &["چی", "چه", "کجا", "کی", "چرا"];

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

impl PatternReplyProvider {
    pub fn new(persona: Arc<Persona>) -> Self {
        Self {
            persona,
            picker: TemplatePicker::new(),
        }
    }

    /// Deterministic variant for scenario tests
    pub fn with_seed(persona: Arc<Persona>, seed: u64) -> Self {
        Self {
            persona,
            picker: TemplatePicker::with_seed(seed),
        }
    }
}

#[async_trait]
impl ReplyProvider for PatternReplyProvider {
    fn resolution_path(&self) -> ResolutionPath {
        ResolutionPath::PatternMatch
    }

    async fn attempt(&self, input: &str) -> Result<String, ProviderError> {
        let message = input.to_lowercase();

        if contains_any(&message, MOVIE_KEYWORDS) {
            let suggestion = self
                .picker
                .choose(&self.persona.movie_suggestions)
                .ok_or_else(|| ProviderError::Unavailable("no movie suggestions".to_string()))?;
            return Ok(self.persona.movie_reply(suggestion));
        }

        if contains_any(&message, MUSIC_KEYWORDS) {
            let suggestion = self
                .picker
                .choose(&self.persona.music_suggestions)
                .ok_or_else(|| ProviderError::Unavailable("no music suggestions".to_string()))?;
            return Ok(self.persona.music_reply(suggestion));
        }

        if contains_any(&message, GREETING_KEYWORDS) {
            return Ok(self.persona.greeting_reply());
        }

        if contains_any(&message, WELL_BEING_KEYWORDS) {
            return Ok(self.persona.well_being_reply());
        }

        if contains_any(&message, AFFECTION_KEYWORDS) {
            return Ok(self.persona.affection_reply());
        }

        if contains_any(&message, QUESTION_KEYWORDS) {
            return Ok(self.persona.question_reply());
        }

        Err(ProviderError::CallFailed(
            "no topic bucket matched".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PatternReplyProvider {
        PatternReplyProvider::with_seed(Arc::new(Persona::new("امیر", "بهنوش")), 42)
    }

    #[tokio::test]
    async fn test_movie_bucket_matches_before_question_bucket() {
        // "چرا" is a question keyword but movies are checked first
        let reply = provider().attempt("چرا فیلم خوب معرفی نمی‌کنی؟").await.unwrap();
        assert!(reply.contains("🎬"));
    }

    #[tokio::test]
    async fn test_movie_reply_contains_a_configured_suggestion() {
        let persona = Persona::new("امیر", "بهنوش");
        let reply = provider().attempt("فیلم خوب معرفی کن").await.unwrap();
        assert!(persona
            .movie_suggestions
            .iter()
            .any(|s| reply.contains(s.as_str())));
        assert!(reply.contains("بهنوش"));
    }

    #[tokio::test]
    async fn test_music_bucket() {
        let reply = provider().attempt("یه موزیک بذار").await.unwrap();
        assert!(reply.contains("🎵"));
    }

    #[tokio::test]
    async fn test_greeting_bucket() {
        let reply = provider().attempt("سلام").await.unwrap();
        assert!(reply.starts_with("سلام"));
    }

    #[tokio::test]
    async fn test_unmatched_input_is_a_miss() {
        let result = provider().attempt("xyz qwerty").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_english_keywords_match_case_insensitively() {
        let reply = provider().attempt("I LOVE you").await.unwrap();
        assert!(reply.contains("❤️"));
    }
}
