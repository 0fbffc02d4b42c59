use super::reply_provider::ReplyProvider;
use super::ProviderError;
use crate::domain::chat::{Persona, ResolutionPath, TemplatePicker};
use async_trait::async_trait;
use std::sync::Arc;

/// Last resort in the reply chain: a uniformly-random generic template.
/// Always succeeds as long as the persona carries at least one template.
pub struct TemplateReplyProvider {
    persona: Arc<Persona>,
    picker: TemplatePicker,
}

impl TemplateReplyProvider {
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
impl ReplyProvider for TemplateReplyProvider {
    fn resolution_path(&self) -> ResolutionPath {
        ResolutionPath::Fallback
    }

    async fn attempt(&self, _input: &str) -> Result<String, ProviderError> {
        self.picker
            .choose(&self.persona.conversation_templates)
            .map(|t| t.to_string())
            .ok_or_else(|| ProviderError::Unavailable("no conversation templates".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_produces_a_template() {
        let persona = Arc::new(Persona::new("امیر", "بهنوش"));
        let provider = TemplateReplyProvider::with_seed(persona.clone(), 3);
        let reply = provider.attempt("anything at all").await.unwrap();
        assert!(persona.conversation_templates.contains(&reply));
    }

    #[tokio::test]
    async fn test_seeded_picks_are_reproducible() {
        let persona = Arc::new(Persona::new("امیر", "بهنوش"));
        let a = TemplateReplyProvider::with_seed(persona.clone(), 9);
        let b = TemplateReplyProvider::with_seed(persona, 9);
        assert_eq!(a.attempt("x").await.unwrap(), b.attempt("x").await.unwrap());
    }
}
