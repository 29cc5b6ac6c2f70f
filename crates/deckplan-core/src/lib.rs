//! deckplan Core - outline parsing, edit resolution, and orchestration
//!
//! The heart of the backend:
//! - [`parse`]: turns loosely-formatted numbered text from the generation
//!   service into a validated tree (or a flat list for partial regeneration)
//! - [`edit`]: applies one targeted edit to one node, optionally replacing
//!   everything beneath it with freshly generated content
//! - [`service`]: sequences parser and resolver with the generation and
//!   storage collaborators for the four use cases
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_core::OutlineService;
//! use deckplan_gen::OpenAiGenerator;
//! use deckplan_store::MemoryOutlineStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = OutlineService::new(
//!     OpenAiGenerator::new(std::env::var("OPENAI_API_KEY")?),
//!     MemoryOutlineStore::new(),
//! );
//!
//! let outline = service.create_and_generate("Rust in Production").await?;
//! println!("generated {} chapters", outline.chapters.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod edit;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod service;

// Re-exports for convenience
pub use edit::{EditError, OutlineEdit, PlannedEdit};
pub use error::OutlineError;
pub use parse::{OutlineParser, ParseStats, ParsedList, ParsedOutline};
pub use service::OutlineService;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with deckplan Core
    pub use crate::{OutlineEdit, OutlineError, OutlineParser, OutlineService};
    pub use deckplan_model::{Chapter, EditPath, NodeId, Outline, OutlineId, Point, SubChapter};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
