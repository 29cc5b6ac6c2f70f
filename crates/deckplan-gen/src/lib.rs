//! deckplan Gen - content-generation collaborator
//!
//! Defines the [`ContentGenerator`] capability the outline service consumes
//! (`generate(prompt) -> text`) and provides [`OpenAiGenerator`], a client
//! for OpenAI-compatible chat-completions endpoints.
//!
//! Failures propagate as [`GenerateError`]; no retry logic lives here - the
//! service makes at most one call per action and surfaces errors upward.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod generator;
pub mod openai;

// Re-exports for convenience
pub use generator::{ContentGenerator, GenerateError};
pub use openai::OpenAiGenerator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
