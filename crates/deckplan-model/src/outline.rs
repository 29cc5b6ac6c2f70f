//! Outline tree entities
//!
//! The tree is strictly nested: an outline owns its chapters, a chapter its
//! sub-chapters, a sub-chapter its points. Child order is significant - it
//! mirrors the numbered outline presented to the user. Ids are random and
//! generated fresh at creation time; they are never reused or reassigned.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique outline document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutlineId(pub Uuid);

impl OutlineId {
    /// Generate new outline ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OutlineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OutlineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OutlineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Unique node identifier (chapter, sub-chapter, or point)
///
/// Unique within an outline; a fresh id is generated for every node a parse
/// or regeneration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Generate new node ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Root document: one presentation's hierarchical content plan
///
/// Persisted and fetched as a single unit; the stored representation is the
/// serde rendering of this tree, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Outline identifier (document key)
    pub id: OutlineId,
    /// Outline title
    pub title: String,
    /// Ordered chapter sequence
    pub chapters: Vec<Chapter>,
}

impl Outline {
    /// Create a new outline with no chapters
    ///
    /// The title is stored trimmed.
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: OutlineId::new(),
            title: trimmed(title),
            chapters: Vec::new(),
        }
    }

    /// With chapters
    #[inline]
    #[must_use]
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }
}

/// Top-level titled node owning sub-chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Node identifier
    pub id: NodeId,
    /// Chapter title
    pub title: String,
    /// Ordered sub-chapter sequence
    pub sub_chapters: Vec<SubChapter>,
}

impl Chapter {
    /// Create a new chapter with no sub-chapters
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            title: trimmed(title),
            sub_chapters: Vec::new(),
        }
    }

    /// With sub-chapters
    #[inline]
    #[must_use]
    pub fn with_sub_chapters(mut self, sub_chapters: Vec<SubChapter>) -> Self {
        self.sub_chapters = sub_chapters;
        self
    }
}

/// Mid-level titled node owning points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubChapter {
    /// Node identifier
    pub id: NodeId,
    /// Sub-chapter title
    pub title: String,
    /// Ordered point sequence
    pub points: Vec<Point>,
}

impl SubChapter {
    /// Create a new sub-chapter with no points
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            title: trimmed(title),
            points: Vec::new(),
        }
    }

    /// With points
    #[inline]
    #[must_use]
    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }
}

/// Leaf node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Node identifier
    pub id: NodeId,
    /// Point title
    pub title: String,
}

impl Point {
    /// Create a new point
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            title: trimmed(title),
        }
    }
}

/// Titles are stored trimmed
fn trimmed(title: impl Into<String>) -> String {
    let title = title.into();
    let t = title.trim();
    if t.len() == title.len() {
        title
    } else {
        t.to_string()
    }
}
