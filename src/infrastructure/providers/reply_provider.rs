use super::ProviderError;
use crate::domain::chat::ResolutionPath;
use async_trait::async_trait;

/// One strategy for turning an inbound message into a reply.
///
/// The resolver holds an ordered list of these and stops at the first
/// success; an `Err` means "miss, try the next one". Implementations must
/// never panic on provider garbage - map it to `ProviderError` instead.
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Tag recorded on the `ChatTurn` when this provider wins
    fn resolution_path(&self) -> ResolutionPath;

    /// Attempt to produce a reply for the (already normalized) input
    async fn attempt(&self, input: &str) -> Result<String, ProviderError>;
}
