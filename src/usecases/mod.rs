//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;
pub mod orchestrator;

pub use chat_service::ChatService;
pub use orchestrator::ResponseOrchestrator;
