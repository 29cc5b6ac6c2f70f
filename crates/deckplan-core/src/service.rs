//! Outline service
//!
//! Sequences the parser and edit resolver with the generation and storage
//! collaborators for the four use cases: create-and-generate, fetch,
//! create-empty, and edit. Collaborators are explicitly constructed handles
//! passed in at startup; nothing here reaches for ambient state.
//!
//! Calls to the collaborators are strictly sequential within one use case,
//! and no partial state is ever persisted: a create writes only after
//! generation and parsing succeeded, and a failed edit writes nothing.

use crate::edit::OutlineEdit;
use crate::error::OutlineError;
use crate::parse::OutlineParser;
use crate::prompt;
use deckplan_gen::ContentGenerator;
use deckplan_model::{Outline, OutlineId};
use deckplan_store::{MutationAbort, OutlineStore, TransactOutcome};

/// Placeholder title for create-empty requests with a blank title
const UNTITLED: &str = "Untitled outline";

/// The outline service
///
/// Owns its collaborator handles; cheap to share behind an `Arc` across
/// request handlers.
#[derive(Debug)]
pub struct OutlineService<G, S> {
    /// Content-generation collaborator
    generator: G,
    /// Document-storage collaborator
    store: S,
    /// Outline text parser
    parser: OutlineParser,
}

impl<G, S> OutlineService<G, S>
where
    G: ContentGenerator,
    S: OutlineStore,
{
    /// Create a new service with the given collaborators
    #[inline]
    #[must_use]
    pub fn new(generator: G, store: S) -> Self {
        Self {
            generator,
            store,
            parser: OutlineParser::new(),
        }
    }

    /// Create an outline and populate its chapters from generated content
    ///
    /// Rejects a blank title before any generation call. The generated text
    /// is parsed tolerantly; an outline with zero chapters is a legitimate
    /// result and is persisted as-is.
    ///
    /// # Errors
    /// - `OutlineError::EmptyTitle` when the title trims to nothing
    /// - `OutlineError::Generation` / `OutlineError::Storage` on
    ///   collaborator failure (nothing is persisted in either case)
    pub async fn create_and_generate(&self, title: &str) -> Result<Outline, OutlineError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(OutlineError::EmptyTitle);
        }

        tracing::info!(%title, "creating outline from generated content");
        let generated = self
            .generator
            .generate(&prompt::outline_prompt(title))
            .await?;

        let parsed = self.parser.parse_outline(&generated, title);
        tracing::debug!(
            chapters = parsed.outline.chapters.len(),
            recognized = parsed.stats.recognized,
            ignored = parsed.stats.ignored,
            orphaned = parsed.stats.orphaned,
            "parsed generated outline"
        );

        self.store.put(&parsed.outline).await?;
        Ok(parsed.outline)
    }

    /// Load an outline by id
    ///
    /// # Errors
    /// - `OutlineError::NotFound` when no document exists under `id`
    pub async fn fetch(&self, id: OutlineId) -> Result<Outline, OutlineError> {
        self.store
            .get(id)
            .await?
            .ok_or(OutlineError::NotFound(id))
    }

    /// Create an outline with no chapters; no generation call is made
    ///
    /// A blank title is replaced by a placeholder rather than rejected.
    pub async fn create_empty(&self, title: &str) -> Result<Outline, OutlineError> {
        let title = title.trim();
        let outline = Outline::new(if title.is_empty() { UNTITLED } else { title });
        self.store.put(&outline).await?;
        Ok(outline)
    }

    /// Apply one targeted edit and persist the mutated tree
    ///
    /// Resolution happens against a read copy (including the at-most-one
    /// generation call); the mutation is then committed through the store's
    /// transaction, which re-validates document existence and re-locates
    /// the target, so a concurrent delete or restructure aborts cleanly.
    ///
    /// # Errors
    /// - `OutlineError::NotFound` when the outline is absent (at read or at
    ///   commit time)
    /// - `OutlineError::InvalidEditPath` when the target matches no node;
    ///   no write happens
    /// - `OutlineError::Generation` / `OutlineError::Storage` on
    ///   collaborator failure
    pub async fn edit(&self, id: OutlineId, edit: OutlineEdit) -> Result<Outline, OutlineError> {
        let outline = self.fetch(id).await?;

        tracing::info!(
            %id,
            level = edit.path.level(),
            regenerate = edit.regenerate,
            "editing outline"
        );
        let planned = crate::edit::plan(&outline, &edit, &self.generator).await?;

        let outcome = self
            .store
            .transact(
                id,
                Box::new(move |doc| planned.apply(doc).map_err(|_| MutationAbort)),
            )
            .await?;

        match outcome {
            TransactOutcome::Committed(updated) => Ok(updated),
            TransactOutcome::Missing => Err(OutlineError::NotFound(id)),
            TransactOutcome::Aborted => Err(OutlineError::InvalidEditPath),
        }
    }

    /// Get the generation collaborator
    #[inline]
    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get the storage collaborator
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
