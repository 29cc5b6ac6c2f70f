//! deckplan Store - document storage for outlines
//!
//! One outline is one document, keyed by the outline's own id and stored as
//! the serde rendering of the in-memory tree. The [`OutlineStore`] trait
//! exposes the narrow contract the service consumes:
//! - `get(id)` (absence is a normal outcome)
//! - `put(outline)` (upsert)
//! - `transact(id, mutation)` (atomic read-modify-write that re-validates
//!   document existence at commit time)
//!
//! Backends: [`SqliteOutlineStore`] for persistence, [`MemoryOutlineStore`]
//! for tests and ephemeral runs.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod memory;
pub mod sqlite;
pub mod store;

// Re-exports for convenience
pub use memory::MemoryOutlineStore;
pub use sqlite::SqliteOutlineStore;
pub use store::{Mutation, MutationAbort, OutlineStore, StoreError, TransactOutcome};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
