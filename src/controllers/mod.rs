pub mod chat;
pub mod health;
pub mod search;
pub mod speech;

/// Transport message limit; longer inbound text is rejected at the edge
pub const MAX_MESSAGE_CHARS: usize = 4096;
