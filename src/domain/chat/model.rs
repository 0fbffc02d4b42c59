use serde::{Deserialize, Serialize};

/// Which strategy produced a given reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    GenerativeAi,
    PatternMatch,
    Fallback,
}

impl ResolutionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPath::GenerativeAi => "generative_ai",
            ResolutionPath::PatternMatch => "pattern_match",
            ResolutionPath::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One resolved conversation turn, created per inbound message and
/// discarded after the reply is delivered.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub input_text: String,
    pub reply: String,
    pub path: ResolutionPath,
}
