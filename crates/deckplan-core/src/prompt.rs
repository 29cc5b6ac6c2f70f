//! Prompt builders for the content-generation collaborator
//!
//! The prompts spell out the exact numbered format the parser understands;
//! the generation service is asked to follow it strictly, and the parser
//! tolerates the cases where it does not.

/// Upper bound on points per sub-chapter requested from the generator
pub const MAX_POINTS_PER_SUB_CHAPTER: usize = 6;

/// Prompt for generating a complete outline from a presentation title
///
/// Explicit count requests embedded in the title itself (e.g. "... in 3
/// chapters") take precedence over the defaults, per the instructions.
#[must_use]
pub fn outline_prompt(title: &str) -> String {
    format!(
        "Produce a detailed, up-to-date presentation outline for \"{title}\". \
The outline must contain the main chapters; every chapter contains \
sub-chapters, and every sub-chapter breaks down into a few points. Adjust \
the number of points to the complexity of the topic, never exceeding \
{MAX_POINTS_PER_SUB_CHAPTER} per sub-chapter. If \"{title}\" itself asks \
for a specific number of chapters, sub-chapters, or points, honor that \
request. Follow this format exactly:

{title}
1. Chapter title
  1.1 Sub-chapter title
    1.1.1 Point
    1.1.2 Point

...continue in exactly this numbered format for all content suited to \
\"{title}\"; do not change the format."
    )
}

/// Prompt for regenerating the sub-chapters of one chapter
#[must_use]
pub fn sub_chapter_prompt(chapter_title: &str) -> String {
    format!(
        "Given the chapter title \"{chapter_title}\", produce a list of \
fitting sub-chapters in this format:
1. Sub-chapter title
2. Sub-chapter title
3. Sub-chapter title"
    )
}

/// Prompt for regenerating the points of one sub-chapter
#[must_use]
pub fn point_prompt(sub_chapter_title: &str) -> String {
    format!(
        "Given the sub-chapter title \"{sub_chapter_title}\", produce a list \
of fitting points in this format:
1. Point
2. Point
3. Point"
    )
}
