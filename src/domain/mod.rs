//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here: keyword tables, reply pools, the
//! persona prompt. Dependencies flow inward.

pub mod classifier;
pub mod crisis;
pub mod entities;
pub mod errors;
pub mod fallback;
pub mod media_library;
pub mod prompt;

pub use classifier::{analyze_emotion, classify_emotion, classify_media};
pub use crisis::{assess_crisis, crisis_response};
pub use entities::{
    ChatReply, CrisisAssessment, CrisisLevel, EmotionAnalysis, EmotionLabel, GeneratedReply,
    MediaCategory, MediaIntentSignal, MediaItem, MediaType, Prompt, RecommendedAction, Reply,
    ReplySource,
};
pub use errors::{DomainError, GenerationError, Recovery};
pub use fallback::{RandomSource, Topic, select_fallback};
pub use media_library::MediaLibrary;
pub use prompt::build_prompt;
