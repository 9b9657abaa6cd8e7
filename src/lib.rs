//! mindchat: wellness chat companion with Hexagonal Architecture.
//!
//! Detects media requests, tags emotion, and answers through an external LLM
//! with a rule-based fallback.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
