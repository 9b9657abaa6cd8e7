//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{GenerationError, Prompt};

/// External text-generation service.
///
/// Implementations make a single attempt per call: no retries, no streaming.
/// The caller owns the timeout.
#[async_trait::async_trait]
pub trait GenerationPort: Send + Sync {
    /// Generate a reply for the prompt.
    ///
    /// Returns the trimmed completion, or [`GenerationError::EmptyResult`] when
    /// the service produced no text.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}
