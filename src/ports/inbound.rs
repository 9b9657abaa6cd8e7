//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: a front end that feeds user messages into the chat service.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the conversation loop until the user leaves.
    async fn run(&self) -> Result<(), DomainError>;
}
