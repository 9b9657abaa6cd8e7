//! Response orchestrator. Routes one message to exactly one reply.
//!
//! media intent → generation → (rule-based fallback | placeholder).
//! Every pass runs on its own task so a panic anywhere in routing still
//! yields a reply.

use crate::domain::errors::GENERIC_ERROR_REPLY;
use crate::domain::{
    GeneratedReply, GenerationError, RandomSource, Recovery, Reply, build_prompt, classify_media,
};
use crate::ports::GenerationPort;
use crate::shared::config::DEFAULT_GENERATION_TIMEOUT_SECS;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Stateless per call; cheap to clone.
#[derive(Clone)]
pub struct ResponseOrchestrator {
    generator: Option<Arc<dyn GenerationPort>>,
    rng: RandomSource,
    timeout: Duration,
}

impl ResponseOrchestrator {
    /// Create an orchestrator.
    ///
    /// # Arguments
    /// * `generator` - Generation delegate; `None` when no credential is configured
    pub fn new(generator: Option<Arc<dyn GenerationPort>>) -> Self {
        Self {
            generator,
            rng: RandomSource::default(),
            timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }

    pub fn with_random_source(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn random_source(&self) -> RandomSource {
        self.rng
    }

    pub fn is_generation_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Produce a reply for a non-empty message. Never fails.
    pub async fn respond(&self, message: &str) -> Reply {
        let this = self.clone();
        let message = message.to_string();
        match tokio::spawn(async move { this.route(&message).await }).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "response pipeline failed; using generic reply");
                Reply::Text(GeneratedReply::placeholder(GENERIC_ERROR_REPLY))
            }
        }
    }

    async fn route(&self, message: &str) -> Reply {
        if let Some(signal) = classify_media(message) {
            info!(
                category = %signal.category,
                media_type = %signal.media_type,
                "media intent detected; skipping generation"
            );
            return Reply::Media(signal);
        }

        match self.generate(message).await {
            Ok(text) => {
                debug!(reply_len = text.len(), "generated reply");
                Reply::Text(GeneratedReply::external(text))
            }
            Err(e) => self.recover(message, &e),
        }
    }

    /// Single generation attempt under the configured timeout.
    async fn generate(&self, message: &str) -> Result<String, GenerationError> {
        let Some(generator) = &self.generator else {
            return Err(GenerationError::Unconfigured);
        };

        let prompt = build_prompt(message);
        let text = tokio::time::timeout(self.timeout, generator.generate(&prompt))
            .await
            .map_err(|_| {
                GenerationError::Transport(format!("timed out after {:?}", self.timeout))
            })??;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResult);
        }
        Ok(text.to_string())
    }

    fn recover(&self, message: &str, err: &GenerationError) -> Reply {
        match err.recovery() {
            Recovery::RuleBased => {
                if matches!(err, GenerationError::Unconfigured) {
                    debug!("generation unconfigured; using rule-based reply");
                } else {
                    warn!(error = %err, "generation unavailable; using rule-based reply");
                }
                Reply::Text(GeneratedReply::fallback(self.rng.select_fallback(message)))
            }
            Recovery::Placeholder(text) => {
                warn!(error = %err, "generation failed; using placeholder reply");
                Reply::Text(GeneratedReply::placeholder(text))
            }
        }
    }
}
