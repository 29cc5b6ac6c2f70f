//! Outline text parser
//!
//! Converts a generated block of numbered text into structured entities.
//! The generation service is not guaranteed to produce perfectly formatted
//! output, so the parser is forgiving by design: lines that match no
//! numbering shape are ignored as prose, and numbered lines with no parent
//! to attach to are dropped rather than failing the parse. The parse never
//! errors; callers that care can inspect [`ParseStats`].
//!
//! Line shapes, most specific first:
//! - point: `1.1.1 Title`
//! - sub-chapter: `1.1 Title`
//! - chapter: `1. Title`
//!
//! The mandatory whitespace after the numbering keeps the three shapes
//! mutually exclusive (`1.1 x` is not a chapter line because no whitespace
//! follows the first dot).

use deckplan_model::{Chapter, Outline, Point, SubChapter};
use once_cell::sync::Lazy;
use regex::Regex;

/// Point line: three-segment numbering
static POINT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\s+(.*)").expect("valid point regex"));

/// Sub-chapter line: two-segment numbering
static SUB_CHAPTER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\s+(.*)").expect("valid sub-chapter regex"));

/// Chapter line: single-segment numbering; also the flat-list item shape
static CHAPTER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)").expect("valid chapter regex"));

/// Diagnostic counts from a parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines that produced an entity
    pub recognized: usize,
    /// Lines matching no numbering shape, ignored as prose
    pub ignored: usize,
    /// Numbered lines dropped because no parent node existed yet
    pub orphaned: usize,
}

/// Result of a full-outline parse
#[derive(Debug, Clone)]
pub struct ParsedOutline {
    /// The parsed tree; may legitimately have zero chapters
    pub outline: Outline,
    /// Diagnostic counts
    pub stats: ParseStats,
}

/// Result of a flat-list parse
#[derive(Debug, Clone)]
pub struct ParsedList<T> {
    /// Parsed entities, in input order
    pub items: Vec<T>,
    /// Diagnostic counts
    pub stats: ParseStats,
}

/// Parser for generated outline text
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineParser;

impl OutlineParser {
    /// Create new outline parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a full outline from generated text
    ///
    /// Scans top-to-bottom keeping a current-chapter / current-sub-chapter
    /// cursor. Every produced node gets a fresh id; captured titles are
    /// stored trimmed. Sub-chapter lines before any chapter, and point
    /// lines before any sub-chapter, are dropped.
    #[must_use]
    pub fn parse_outline(&self, text: &str, title: impl Into<String>) -> ParsedOutline {
        let mut chapters: Vec<Chapter> = Vec::new();
        let mut stats = ParseStats::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = POINT_LINE.captures(line) {
                match chapters.last_mut().and_then(|c| c.sub_chapters.last_mut()) {
                    Some(sub) => {
                        sub.points.push(Point::new(&caps[1]));
                        stats.recognized += 1;
                    }
                    None => stats.orphaned += 1,
                }
            } else if let Some(caps) = SUB_CHAPTER_LINE.captures(line) {
                match chapters.last_mut() {
                    Some(chapter) => {
                        chapter.sub_chapters.push(SubChapter::new(&caps[1]));
                        stats.recognized += 1;
                    }
                    None => stats.orphaned += 1,
                }
            } else if let Some(caps) = CHAPTER_LINE.captures(line) {
                chapters.push(Chapter::new(&caps[1]));
                stats.recognized += 1;
            } else {
                stats.ignored += 1;
            }
        }

        ParsedOutline {
            outline: Outline::new(title).with_chapters(chapters),
            stats,
        }
    }

    /// Parse a single-level numbered list into sub-chapters (empty points)
    ///
    /// Used when regenerating one chapter's children.
    #[must_use]
    pub fn parse_sub_chapters(&self, text: &str) -> ParsedList<SubChapter> {
        self.parse_flat(text, |title| SubChapter::new(title))
    }

    /// Parse a single-level numbered list into points
    ///
    /// Used when regenerating one sub-chapter's children.
    #[must_use]
    pub fn parse_points(&self, text: &str) -> ParsedList<Point> {
        self.parse_flat(text, |title| Point::new(title))
    }

    /// Flat-list parse: one entity per `1. Title` line, input order kept
    fn parse_flat<T>(&self, text: &str, make: impl Fn(&str) -> T) -> ParsedList<T> {
        let mut items = Vec::new();
        let mut stats = ParseStats::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = CHAPTER_LINE.captures(line) {
                items.push(make(&caps[1]));
                stats.recognized += 1;
            } else {
                stats.ignored += 1;
            }
        }

        ParsedList { items, stats }
    }
}
