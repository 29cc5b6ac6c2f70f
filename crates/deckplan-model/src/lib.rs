//! deckplan Model - Outline tree model
//!
//! Defines the four-level entity hierarchy shared by every deckplan crate:
//! - Outline (root document)
//! - Chapter
//! - SubChapter
//! - Point (leaf)
//!
//! plus the id newtypes and the [`EditPath`] reference type used to target
//! a single node for an in-place edit.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod outline;
pub mod path;

// Re-exports for convenience
pub use outline::{Chapter, NodeId, Outline, OutlineId, Point, SubChapter};
pub use path::EditPath;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
