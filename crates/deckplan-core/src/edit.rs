//! Edit resolver
//!
//! Applies one targeted edit to exactly one node of an outline tree:
//! rename the node, and optionally replace its entire child subtree with
//! freshly generated content. The resolver never talks to storage.
//!
//! Resolution is split into two phases so the (at most one) generation call
//! happens outside the storage transaction while the mutation is applied
//! atomically against the freshest stored copy:
//! 1. [`plan`] locates the target in a read copy and, if regeneration was
//!    requested, generates and parses the replacement children. A target
//!    that matches nothing short-circuits before any generation call.
//! 2. [`PlannedEdit::apply`] re-locates the target in the document under
//!    the transaction and applies the title change and child replacement.
//!    A target that vanished in between aborts with no mutation.

use crate::parse::OutlineParser;
use crate::prompt;
use deckplan_gen::{ContentGenerator, GenerateError};
use deckplan_model::{EditPath, Outline, Point, SubChapter};

/// Errors from edit resolution
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The edit target matches no node in the tree
    #[error("edit path matches no node in the outline")]
    InvalidPath,

    /// Regeneration failed at the generation collaborator
    #[error("content generation failed: {0}")]
    Generation(#[from] GenerateError),
}

/// One targeted edit request
#[derive(Debug, Clone)]
pub struct OutlineEdit {
    /// Node to edit
    pub path: EditPath,
    /// Replacement title
    pub new_title: String,
    /// Whether to discard and regenerate the node's children
    pub regenerate: bool,
}

impl OutlineEdit {
    /// Create a rename-only edit
    #[inline]
    #[must_use]
    pub fn rename(path: EditPath, new_title: impl Into<String>) -> Self {
        Self {
            path,
            new_title: new_title.into(),
            regenerate: false,
        }
    }

    /// With regeneration of the node's children
    #[inline]
    #[must_use]
    pub fn with_regenerate(mut self) -> Self {
        self.regenerate = true;
        self
    }
}

/// Replacement children produced by regeneration
#[derive(Debug, Clone)]
enum Replacement {
    /// New sub-chapters for a chapter target
    SubChapters(Vec<SubChapter>),
    /// New points for a sub-chapter target
    Points(Vec<Point>),
}

/// A resolved edit, ready to apply to a fresh copy of the tree
#[derive(Debug, Clone)]
pub struct PlannedEdit {
    path: EditPath,
    new_title: String,
    replacement: Option<Replacement>,
}

/// Resolve an edit against a read copy of the outline
///
/// Locates the target node and, when `regenerate` is set on a chapter or
/// sub-chapter target, makes exactly one generation call and flat-parses
/// the response into replacement children with fresh ids. Points have no
/// children, so regeneration is a no-op at that level.
///
/// # Errors
/// - `EditError::InvalidPath` when the target matches no node (checked
///   before any generation call)
/// - `EditError::Generation` when the collaborator fails
pub async fn plan<G>(
    outline: &Outline,
    edit: &OutlineEdit,
    generator: &G,
) -> Result<PlannedEdit, EditError>
where
    G: ContentGenerator + ?Sized,
{
    if !target_exists(outline, edit.path) {
        return Err(EditError::InvalidPath);
    }

    let parser = OutlineParser::new();
    let replacement = match (edit.path, edit.regenerate) {
        (EditPath::Chapter(_), true) => {
            let text = generator
                .generate(&prompt::sub_chapter_prompt(&edit.new_title))
                .await?;
            let parsed = parser.parse_sub_chapters(&text);
            tracing::debug!(
                count = parsed.items.len(),
                ignored = parsed.stats.ignored,
                "regenerated sub-chapters"
            );
            Some(Replacement::SubChapters(parsed.items))
        }
        (EditPath::SubChapter(_), true) => {
            let text = generator
                .generate(&prompt::point_prompt(&edit.new_title))
                .await?;
            let parsed = parser.parse_points(&text);
            tracing::debug!(
                count = parsed.items.len(),
                ignored = parsed.stats.ignored,
                "regenerated points"
            );
            Some(Replacement::Points(parsed.items))
        }
        _ => None,
    };

    Ok(PlannedEdit {
        path: edit.path,
        new_title: edit.new_title.trim().to_string(),
        replacement,
    })
}

impl PlannedEdit {
    /// Apply the edit in place
    ///
    /// Searches for the target by id (first match in document order), sets
    /// its title, and replaces its entire child sequence when regeneration
    /// produced one. Replacing is a full replace, not a merge: prior
    /// children and everything beneath them are discarded.
    ///
    /// # Errors
    /// - `EditError::InvalidPath` when the target is no longer present; the
    ///   tree is left untouched
    pub fn apply(self, outline: &mut Outline) -> Result<(), EditError> {
        match self.path {
            EditPath::Chapter(id) => {
                let chapter = outline
                    .chapters
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(EditError::InvalidPath)?;
                chapter.title = self.new_title;
                if let Some(Replacement::SubChapters(sub_chapters)) = self.replacement {
                    chapter.sub_chapters = sub_chapters;
                }
                Ok(())
            }
            EditPath::SubChapter(id) => {
                let sub_chapter = outline
                    .chapters
                    .iter_mut()
                    .flat_map(|c| c.sub_chapters.iter_mut())
                    .find(|s| s.id == id)
                    .ok_or(EditError::InvalidPath)?;
                sub_chapter.title = self.new_title;
                if let Some(Replacement::Points(points)) = self.replacement {
                    sub_chapter.points = points;
                }
                Ok(())
            }
            EditPath::Point(id) => {
                let point = outline
                    .chapters
                    .iter_mut()
                    .flat_map(|c| c.sub_chapters.iter_mut())
                    .flat_map(|s| s.points.iter_mut())
                    .find(|p| p.id == id)
                    .ok_or(EditError::InvalidPath)?;
                point.title = self.new_title;
                Ok(())
            }
        }
    }
}

/// Whether the edit target is present in the tree
fn target_exists(outline: &Outline, path: EditPath) -> bool {
    match path {
        EditPath::Chapter(id) => outline.chapters.iter().any(|c| c.id == id),
        EditPath::SubChapter(id) => outline
            .chapters
            .iter()
            .flat_map(|c| &c.sub_chapters)
            .any(|s| s.id == id),
        EditPath::Point(id) => outline
            .chapters
            .iter()
            .flat_map(|c| &c.sub_chapters)
            .flat_map(|s| &s.points)
            .any(|p| p.id == id),
    }
}
