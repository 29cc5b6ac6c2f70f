//! deckplan Server - HTTP surface
//!
//! Thin layer over [`deckplan_core::OutlineService`]:
//! - `GET /` - liveness text
//! - `POST /outlines` - create-and-generate
//! - `POST /outlines/empty` - create without generation
//! - `GET /outlines/:id` - fetch
//! - `PUT /outlines/:id` - targeted edit
//!
//! Wire bodies use camelCase field names; the three-optional-fields
//! `editPath` object is converted into the [`deckplan_model::EditPath`] sum
//! type right here at the boundary.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod routes;
pub mod wire;

// Re-exports for convenience
pub use routes::{router, serve};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
