//! In-memory outline store
//!
//! Backed by a `DashMap`; `transact` mutates a clone under the map's shard
//! lock and writes back only when the mutation succeeds, so an aborted
//! mutation can never leave a half-edited document behind.

use crate::store::{Mutation, OutlineStore, StoreError, TransactOutcome};
use async_trait::async_trait;
use dashmap::DashMap;
use deckplan_model::{Outline, OutlineId};

/// In-memory store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryOutlineStore {
    outlines: DashMap<OutlineId, Outline>,
}

impl MemoryOutlineStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored outlines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

#[async_trait]
impl OutlineStore for MemoryOutlineStore {
    async fn get(&self, id: OutlineId) -> Result<Option<Outline>, StoreError> {
        Ok(self.outlines.get(&id).map(|entry| entry.clone()))
    }

    async fn put(&self, outline: &Outline) -> Result<(), StoreError> {
        self.outlines.insert(outline.id, outline.clone());
        Ok(())
    }

    async fn transact(
        &self,
        id: OutlineId,
        mutation: Mutation,
    ) -> Result<TransactOutcome, StoreError> {
        let Some(mut entry) = self.outlines.get_mut(&id) else {
            return Ok(TransactOutcome::Missing);
        };

        let mut document = entry.clone();
        if mutation(&mut document).is_err() {
            return Ok(TransactOutcome::Aborted);
        }

        *entry = document.clone();
        Ok(TransactOutcome::Committed(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MutationAbort;
    use deckplan_model::Chapter;

    #[tokio::test]
    async fn put_get_round_trip() {
        let store = MemoryOutlineStore::new();
        let outline = Outline::new("Topic").with_chapters(vec![Chapter::new("One")]);

        store.put(&outline).await.unwrap();
        assert_eq!(store.get(outline.id).await.unwrap().unwrap(), outline);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_absent_is_none() {
        let store = MemoryOutlineStore::new();
        assert!(store.get(OutlineId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn transact_missing_and_abort() {
        let store = MemoryOutlineStore::new();
        let outline = Outline::new("Topic");
        store.put(&outline).await.unwrap();

        let outcome = store
            .transact(OutlineId::new(), Box::new(|_| Ok(())))
            .await
            .unwrap();
        assert_eq!(outcome, TransactOutcome::Missing);

        let outcome = store
            .transact(
                outline.id,
                Box::new(|doc| {
                    doc.title = "half-edited".to_string();
                    Err(MutationAbort)
                }),
            )
            .await
            .unwrap();
        assert_eq!(outcome, TransactOutcome::Aborted);
        assert_eq!(store.get(outline.id).await.unwrap().unwrap(), outline);
    }

    #[tokio::test]
    async fn transact_commits_and_returns_document() {
        let store = MemoryOutlineStore::new();
        let outline = Outline::new("Topic");
        store.put(&outline).await.unwrap();

        let outcome = store
            .transact(
                outline.id,
                Box::new(|doc| {
                    doc.title = "Edited".to_string();
                    Ok(())
                }),
            )
            .await
            .unwrap();

        let TransactOutcome::Committed(committed) = outcome else {
            panic!("expected commit");
        };
        assert_eq!(committed.title, "Edited");
        assert_eq!(store.get(outline.id).await.unwrap().unwrap().title, "Edited");
    }
}
