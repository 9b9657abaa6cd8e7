//! Infrastructure adapters. Implement ports.
//!
//! Generation service and terminal UI. Map errors to domain errors.

pub mod ai;
pub mod ui;
