//! Mock generation adapter for testing without API calls.
//!
//! Plays back a scripted outcome and counts calls, so tests can force every
//! failure class and check that generation was (or was not) invoked.

use crate::domain::{GenerationError, Prompt};
use crate::ports::GenerationPort;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Scripted result of a mock generation call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Reply(String),
    Fail(GenerationError),
    /// Panic inside the call.
    Panic,
}

/// Mock generation adapter.
///
/// Returns a predetermined outcome without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockGenerationAdapter {
    behavior: MockBehavior,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<Prompt>>,
}

impl MockGenerationAdapter {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::new(MockBehavior::Fail(error))
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait::async_trait]
impl GenerationPort for MockGenerationAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.clone());
        }
        info!(
            message_len = prompt.user_prompt.len(),
            "[MOCK] Simulating generation"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.behavior {
            MockBehavior::Reply(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Err(GenerationError::EmptyResult)
                } else {
                    Ok(text.to_string())
                }
            }
            MockBehavior::Fail(error) => Err(error.clone()),
            MockBehavior::Panic => panic!("[MOCK] generation adapter panicked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_prompt;

    #[tokio::test]
    async fn test_mock_adapter_counts_and_records() {
        let adapter = MockGenerationAdapter::replying("  hi there  ").with_delay(5);
        let prompt = build_prompt("hello");

        let reply = adapter.generate(&prompt).await.unwrap();

        assert_eq!(reply, "hi there");
        assert_eq!(adapter.calls(), 1);
        assert_eq!(adapter.last_prompt(), Some(prompt));
    }

    #[tokio::test]
    async fn test_mock_adapter_blank_reply_is_empty_result() {
        let adapter = MockGenerationAdapter::replying("   ");
        let err = adapter.generate(&build_prompt("x")).await.unwrap_err();
        assert_eq!(err, GenerationError::EmptyResult);
    }
}
