use super::model::{ChatTurn, ResolutionPath};
use super::persona::{Persona, TemplatePicker};
use crate::domain::text;
use crate::infrastructure::providers::ReplyProvider;
use std::sync::Arc;

/// Resolves an inbound message into a reply by walking an ordered chain
/// of reply providers - first success wins. Provider failures never
/// escape this service; resolution always produces a `ChatTurn`.
pub struct ChatService {
    providers: Vec<Arc<dyn ReplyProvider>>,
    persona: Arc<Persona>,
    picker: TemplatePicker,
}

impl ChatService {
    pub fn new(providers: Vec<Arc<dyn ReplyProvider>>, persona: Arc<Persona>) -> Self {
        Self {
            providers,
            persona,
            picker: TemplatePicker::new(),
        }
    }

    /// Deterministic variant for scenario tests
    pub fn with_seed(
        providers: Vec<Arc<dyn ReplyProvider>>,
        persona: Arc<Persona>,
        seed: u64,
    ) -> Self {
        Self {
            providers,
            persona,
            picker: TemplatePicker::with_seed(seed),
        }
    }

    pub async fn resolve(&self, input_text: &str) -> ChatTurn {
        let normalized = text::normalize(input_text);

        for provider in &self.providers {
            match provider.attempt(&normalized).await {
                Ok(reply) => {
                    tracing::info!(
                        path = %provider.resolution_path(),
                        input_length = normalized.chars().count(),
                        persian = text::is_persian(&normalized),
                        "Reply resolved"
                    );
                    return ChatTurn {
                        input_text: normalized,
                        reply,
                        path: provider.resolution_path(),
                    };
                }
                Err(err) => {
                    tracing::debug!(
                        path = %provider.resolution_path(),
                        error = %err,
                        "Reply provider missed, trying next"
                    );
                }
            }
        }

        // The template provider at the end of the chain never misses, so
        // this only fires on a misconfigured (empty) chain.
        tracing::warn!("Every reply provider missed, using a bare template");
        let reply = self
            .picker
            .choose(&self.persona.conversation_templates)
            .unwrap_or("🤖")
            .to_string();
        ChatTurn {
            input_text: normalized,
            reply,
            path: ResolutionPath::Fallback,
        }
    }

    /// A random canned joke addressed to the companion
    pub fn tell_joke(&self) -> String {
        self.picker
            .choose(&self.persona.jokes)
            .unwrap_or("😂")
            .to_string()
    }
}
