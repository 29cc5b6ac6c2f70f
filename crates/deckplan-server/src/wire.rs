//! Request and response wire types
//!
//! Field names are camelCase to match the persisted document format. The
//! `editPath` object carries three optional id fields on the wire; exactly
//! one must be populated, and the conversion to [`EditPath`] enforces that
//! once, here, so the resolver never tests field presence.

use deckplan_model::{EditPath, NodeId};
use serde::{Deserialize, Serialize};

/// Body of `POST /outlines` and `POST /outlines/empty`
#[derive(Debug, Deserialize)]
pub struct CreateOutlineRequest {
    /// Outline title / generation topic
    pub title: String,
}

/// Body of `PUT /outlines/:id`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutlineRequest {
    /// Node reference, exactly one level populated
    pub edit_path: EditPathBody,
    /// Replacement title
    pub new_title: String,
    /// Whether to regenerate the node's children; defaults to false
    #[serde(default)]
    pub regenerate: bool,
}

/// Wire form of an edit path: one of three optional id fields
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPathBody {
    /// Chapter target
    #[serde(default)]
    pub chapter_id: Option<NodeId>,
    /// Sub-chapter target
    #[serde(default)]
    pub sub_chapter_id: Option<NodeId>,
    /// Point target
    #[serde(default)]
    pub point_id: Option<NodeId>,
}

/// The wire edit path did not populate exactly one id field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedEditPath;

impl TryFrom<EditPathBody> for EditPath {
    type Error = MalformedEditPath;

    fn try_from(body: EditPathBody) -> Result<Self, Self::Error> {
        match (body.chapter_id, body.sub_chapter_id, body.point_id) {
            (Some(id), None, None) => Ok(EditPath::Chapter(id)),
            (None, Some(id), None) => Ok(EditPath::SubChapter(id)),
            (None, None, Some(id)) => Ok(EditPath::Point(id)),
            _ => Err(MalformedEditPath),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub message: String,
}
