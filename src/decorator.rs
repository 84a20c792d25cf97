//! Render-time entity annotation
//!
//! Pure functions over block text: they identify every range matching the
//! trigger pattern so the UI can render those spans distinctly. Nothing is
//! stored between renders, so decorated ranges can never drift out of sync
//! with the buffer.

use crate::buffer::TextBuffer;
use crate::types::DecoratedRange;
use regex::Regex;
use std::sync::LazyLock;

/// Trigger-pattern ranges worth decorating
static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<>\w*").unwrap());

/// Invoke `f` with (start, end) for every trigger-pattern range in `text`
pub fn for_each_entity<F>(text: &str, mut f: F)
where
    F: FnMut(usize, usize),
{
    for m in ENTITY_REGEX.find_iter(text) {
        f(m.start(), m.end());
    }
}

/// Collect every trigger-pattern range in `text`
pub fn entities(text: &str) -> Vec<DecoratedRange> {
    let mut ranges = Vec::new();
    for_each_entity(text, |start, end| {
        ranges.push(DecoratedRange {
            start,
            end,
            text: text[start..end].to_string(),
        });
    });
    ranges
}

/// Decorate every block of a buffer for a render pass.
///
/// Returns (block key, ranges) pairs in document order; blocks without
/// entities are omitted.
pub fn buffer_entities(buffer: &TextBuffer) -> Vec<(String, Vec<DecoratedRange>)> {
    buffer
        .blocks()
        .iter()
        .filter_map(|block| {
            let ranges = entities(block.text());
            if ranges.is_empty() {
                None
            } else {
                Some((block.key().to_string(), ranges))
            }
        })
        .collect()
}
