//! Storage contract for outline documents

use async_trait::async_trait;
use deckplan_model::{Outline, OutlineId};

/// Errors from the storage collaborator
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend/database failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored document failed to (de)serialize
    #[error("stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Marker returned by a mutation to abort the surrounding transaction
///
/// Aborting rolls back without writing; the stored document is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationAbort;

/// Mutation applied to a document inside [`OutlineStore::transact`]
pub type Mutation = Box<dyn FnOnce(&mut Outline) -> Result<(), MutationAbort> + Send>;

/// Outcome of a transactional read-modify-write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactOutcome {
    /// Mutation applied and committed; carries the stored document
    Committed(Outline),
    /// The document was absent when the transaction ran; nothing written
    Missing,
    /// The mutation declined the document; nothing written
    Aborted,
}

/// Document store keyed by outline id
///
/// The whole tree for one outline is read and written as a single unit;
/// there is no partial fetch or per-node update.
#[async_trait]
pub trait OutlineStore: Send + Sync {
    /// Load an outline by id
    ///
    /// Absence is a normal outcome, not an error.
    async fn get(&self, id: OutlineId) -> Result<Option<Outline>, StoreError>;

    /// Store an outline under its own id (insert or replace)
    async fn put(&self, outline: &Outline) -> Result<(), StoreError>;

    /// Atomically read, mutate, and write back the document with `id`
    ///
    /// The mutation runs against the freshest stored copy. A document that
    /// is absent at commit time yields [`TransactOutcome::Missing`]; a
    /// mutation returning `Err(MutationAbort)` yields
    /// [`TransactOutcome::Aborted`]. In both cases nothing is written.
    async fn transact(
        &self,
        id: OutlineId,
        mutation: Mutation,
    ) -> Result<TransactOutcome, StoreError>;
}
