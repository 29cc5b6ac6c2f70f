//! Edit path: a reference to exactly one node in an outline tree
//!
//! Constructed once at the HTTP boundary from the wire form (one of three
//! optional id fields) so that everything downstream pattern-matches an
//! exhaustive sum type instead of testing field presence.

use crate::outline::NodeId;

/// Target of an in-place edit: exactly one node at one level of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPath {
    /// A chapter, addressed by its node id
    Chapter(NodeId),
    /// A sub-chapter, addressed by its node id
    SubChapter(NodeId),
    /// A point, addressed by its node id
    Point(NodeId),
}

impl EditPath {
    /// Id of the addressed node
    #[inline]
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        match self {
            EditPath::Chapter(id) | EditPath::SubChapter(id) | EditPath::Point(id) => *id,
        }
    }

    /// Human-readable level name, for diagnostics
    #[inline]
    #[must_use]
    pub fn level(&self) -> &'static str {
        match self {
            EditPath::Chapter(_) => "chapter",
            EditPath::SubChapter(_) => "sub-chapter",
            EditPath::Point(_) => "point",
        }
    }
}
