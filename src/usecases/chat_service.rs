//! Chat service. Boundary between front ends and the response pipeline.
//!
//! Validates input, attaches emotion and crisis metadata, and resolves media
//! replies to a concrete catalog item.

use crate::domain::{
    ChatReply, DomainError, EmotionAnalysis, MediaLibrary, Reply, analyze_emotion, assess_crisis,
    crisis_response,
};
use crate::usecases::ResponseOrchestrator;
use tracing::{info, warn};

pub struct ChatService {
    orchestrator: ResponseOrchestrator,
    library: MediaLibrary,
}

impl ChatService {
    pub fn new(orchestrator: ResponseOrchestrator, library: MediaLibrary) -> Self {
        Self {
            orchestrator,
            library,
        }
    }

    /// Answer one user message.
    ///
    /// # Errors
    /// `DomainError::EmptyMessage` for empty or whitespace-only input.
    pub async fn send_message(&self, message: &str) -> Result<ChatReply, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        let analysis = analyze_emotion(message);
        let crisis = assess_crisis(message, Some(&analysis));
        if crisis.immediate_risk {
            warn!(triggers = ?crisis.triggers, "high crisis level detected");
        }

        let rng = self.orchestrator.random_source();
        let crisis_message = crisis
            .detected()
            .then(|| rng.with_rng(|rng| crisis_response(crisis.level, rng)));

        let reply = self.orchestrator.respond(message).await;
        let suggested_media = match &reply {
            Reply::Media(signal) => rng.with_rng(|rng| {
                self.library
                    .suggest(signal.marker_category(), signal.media_type, rng)
                    .cloned()
            }),
            Reply::Text(_) => None,
        };

        info!(
            emotion = %analysis.emotion,
            crisis = ?crisis.level,
            media = suggested_media.as_ref().map(|m| m.id).unwrap_or("-"),
            "reply ready"
        );

        Ok(ChatReply {
            reply,
            emotion: analysis.emotion,
            crisis,
            crisis_message,
            suggested_media,
            timestamp: chrono::Utc::now(),
        })
    }

    /// False when replies come from the rule-based pools only.
    pub fn is_generation_configured(&self) -> bool {
        self.orchestrator.is_generation_configured()
    }

    /// Emotion analysis of arbitrary text. Empty text is `Neutral`.
    pub fn analyze_emotion(&self, text: &str) -> EmotionAnalysis {
        analyze_emotion(text)
    }
}
