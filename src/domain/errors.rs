//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Reply used when the service answered with no text.
pub const EMPTY_COMPLETION_REPLY: &str = "I'm here for you! Sometimes I get a bit tongue-tied, but I'm always ready to chat. What's on your mind today? 😊";

/// Reply used when the service call failed for a reason other than quota.
pub const TRANSPORT_ERROR_REPLY: &str = "I'm having a little trouble with my words right now, but I'm still here for you! 💕 What's going on with you today?";

/// Last-resort reply when the pipeline itself failed.
pub const GENERIC_ERROR_REPLY: &str = "I'm having a little trouble with my words right now, but I'm still here for you! 💕 Sometimes technology gets a bit wonky, you know? But hey, that just makes me more human, right? What's going on with you today?";

/// Failure of the external generation delegate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No credential; the call is skipped.
    #[error("generation service is not configured")]
    Unconfigured,

    #[error("generation quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other HTTP/API failure, including timeouts.
    #[error("generation request failed: {0}")]
    Transport(String),

    #[error("generation returned an empty completion")]
    EmptyResult,
}

/// How the orchestrator recovers from a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Answer from the rule-based topic pools.
    RuleBased,
    /// Answer with a fixed placeholder.
    Placeholder(&'static str),
}

impl GenerationError {
    pub fn recovery(&self) -> Recovery {
        match self {
            GenerationError::Unconfigured | GenerationError::QuotaExceeded(_) => Recovery::RuleBased,
            GenerationError::Transport(_) => Recovery::Placeholder(TRANSPORT_ERROR_REPLY),
            GenerationError::EmptyResult => Recovery::Placeholder(EMPTY_COMPLETION_REPLY),
        }
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Message is required")]
    EmptyMessage,

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
