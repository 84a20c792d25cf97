//! Entry editing: commit and removal
//!
//! Both operations re-derive the trigger position from the buffer at
//! action time instead of trusting indices captured earlier, so an edit
//! that slipped in between detection and action degrades to a no-op
//! rather than corrupting the buffer.

use crate::buffer::{Selection, TextBuffer};
use crate::matcher;
use crate::types::Mutation;

/// Replace the trigger and match string with the chosen text.
///
/// Locates the trigger occurrence ending at the caret and replaces
/// `[trigger start, caret)` with `text` in a single atomic mutation:
/// one new buffer version, one undo step. The caret lands just after the
/// inserted text. Returns `None` (no mutation) when the selection
/// addresses no block or no trigger occurrence ends at the caret.
pub fn commit_entry(buffer: &TextBuffer, selection: &Selection, text: &str) -> Option<Mutation> {
    let block = buffer.block(selection.block_key())?;
    let caret = selection.start();
    let found = matcher::match_at_caret(block.text(), caret)?;

    let next = buffer
        .replace_range(selection.block_key(), found.start..caret, text)
        .ok()?;
    let caret_after = found.start + text.len();
    Some(Mutation {
        buffer: next,
        selection: Selection::caret(selection.block_key(), caret_after),
    })
}

/// Remove a whole autocompleted entry on backspace.
///
/// Finds the first trigger occurrence in the block; when the caret lies
/// within its span (end boundary included), the full trigger-plus-word
/// range is deleted in one atomic backward mutation and the caret lands
/// at the span start. Returns `None` when the caret falls outside the
/// span, so ordinary single-character deletion can proceed.
pub fn remove_entry(buffer: &TextBuffer, selection: &Selection) -> Option<Mutation> {
    let block = buffer.block(selection.block_key())?;
    let found = matcher::first_match(block.text())?;

    let caret = selection.start();
    if caret < found.start || caret > found.end() {
        return None;
    }

    let next = buffer
        .delete_range(selection.block_key(), found.start..found.end())
        .ok()?;
    Some(Mutation {
        buffer: next,
        selection: Selection::caret(selection.block_key(), found.start),
    })
}
