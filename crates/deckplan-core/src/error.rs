//! Error types for the outline service
//!
//! One error kind per boundary outcome:
//! - validation failure (blank title) and invalid edit paths recover at the
//!   HTTP boundary as client errors
//! - absence of the target outline is not-found
//! - generation and storage failures are not recoverable locally and
//!   surface as server errors

use crate::edit::EditError;
use deckplan_gen::GenerateError;
use deckplan_model::OutlineId;
use deckplan_store::StoreError;

/// Main outline service error type
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// Create was called with an empty or whitespace title
    #[error("title must not be empty")]
    EmptyTitle,

    /// The requested outline does not exist
    #[error("outline not found: {0}")]
    NotFound(OutlineId),

    /// The edit target matches no node in the tree
    #[error("edit path matches no node in the outline")]
    InvalidEditPath,

    /// Content generation failed
    #[error("content generation failed: {0}")]
    Generation(#[from] GenerateError),

    /// Storage failed
    #[error("storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl From<EditError> for OutlineError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::InvalidPath => Self::InvalidEditPath,
            EditError::Generation(e) => Self::Generation(e),
        }
    }
}
