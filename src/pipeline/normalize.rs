//! Normalisation: deterministic cleanup of the model's reply.
//!
//! ## Why is normalisation necessary?
//!
//! Even well-prompted VLMs occasionally wrap their output in
//! ` ```jsx ... ``` ` fences despite the prompt saying "no explanations, no
//! fencing". This module turns the reply's ordered content blocks into the
//! final code string in two cheap, deterministic steps:
//!
//! 1. **Filter-map-join** — keep textual blocks in order, drop everything
//!    else, join with a single line break, trim. An empty or all-non-text
//!    reply yields an empty string rather than an error.
//! 2. **Fence stripping** — remove at most one opening fence marker (with
//!    optional language tag) at the very start and at most one closing
//!    marker at the very end, then re-trim.
//!
//! ## Known limitation
//!
//! Stripping is anchored to the start and end of the trimmed string. If the
//! model surrounds the fence with explanatory prose, the prose (and the now
//! mid-string fences) are returned verbatim. This narrow scope is kept
//! deliberately: guessing at broader cleanup risks eating real code that
//! happens to contain backticks.

use crate::pipeline::vision::ContentBlock;
use once_cell::sync::Lazy;
use regex::Regex;

// Opening marker: ``` plus an optional alphabetic language tag, then a
// newline. Anchored — mid-string fences are not our business.
static RE_OPENING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[A-Za-z]*\n").unwrap());
static RE_CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n```$").unwrap());

/// Turn the reply's content blocks into the final code string.
pub fn normalize(blocks: &[ContentBlock]) -> String {
    let joined: String = blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    strip_code_fences(&joined)
}

/// Strip one outer pair of code-fence markers, if present.
///
/// Each marker is removed at most once, and only when anchored at the very
/// start/end of the trimmed input, so the operation is a no-op on already
/// clean code and never double-strips.
pub fn strip_code_fences(input: &str) -> String {
    let trimmed = input.trim();
    let without_open = RE_OPENING_FENCE.replace(trimmed, "");
    let without_close = RE_CLOSING_FENCE.replace(&without_open, "");
    without_close.trim().to_string()
}
