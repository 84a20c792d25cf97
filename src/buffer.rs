//! Versioned block text buffer
//!
//! The buffer is an ordered sequence of single-line blocks, each with a
//! stable identity key. Mutations never edit in place: `replace_range` and
//! `delete_range` return a new buffer carrying the next version number, so
//! the host can keep earlier versions in its undo history.

use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("no block with key {0:?}")]
    UnknownBlock(String),
    #[error("offset {offset} out of bounds for block of length {len}")]
    OutOfBounds { offset: usize, len: usize },
    #[error("offset {0} is not a character boundary")]
    NotCharBoundary(usize),
    #[error("block text cannot contain a line break")]
    LineBreak,
}

/// A single line of text with a stable identity key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    key: String,
    text: String,
}

impl Block {
    /// Create a block. The text must not contain a line break.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Result<Self, BufferError> {
        let text = text.into();
        if text.contains('\n') {
            return Err(BufferError::LineBreak);
        }
        Ok(Self {
            key: key.into(),
            text,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An immutable version of the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    blocks: Vec<Block>,
    version: u64,
}

impl TextBuffer {
    /// Create an empty buffer at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from source text, one block per line.
    ///
    /// Blocks are keyed `b0`, `b1`, ... in document order.
    pub fn from_text(source: &str) -> Self {
        let blocks = source
            .split('\n')
            .enumerate()
            .map(|(i, line)| Block {
                key: format!("b{}", i),
                text: line.to_string(),
            })
            .collect();
        Self { blocks, version: 0 }
    }

    /// Look up a block by its key
    pub fn block(&self, key: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.key == key)
    }

    /// All blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The version number of this buffer value
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace `range` of the addressed block's text with `text`,
    /// returning a new buffer version. One call, one version: the host's
    /// undo history sees the whole replacement as a single step.
    pub fn replace_range(
        &self,
        key: &str,
        range: Range<usize>,
        text: &str,
    ) -> Result<Self, BufferError> {
        if text.contains('\n') {
            return Err(BufferError::LineBreak);
        }
        let index = self
            .blocks
            .iter()
            .position(|b| b.key == key)
            .ok_or_else(|| BufferError::UnknownBlock(key.to_string()))?;

        let old = &self.blocks[index].text;
        check_range(old, &range)?;

        let mut new_text = String::with_capacity(old.len() - (range.end - range.start) + text.len());
        new_text.push_str(&old[..range.start]);
        new_text.push_str(text);
        new_text.push_str(&old[range.end..]);

        let mut blocks = self.blocks.clone();
        blocks[index].text = new_text;
        Ok(Self {
            blocks,
            version: self.version + 1,
        })
    }

    /// Delete `range` of the addressed block's text in one atomic
    /// mutation, returning a new buffer version.
    pub fn delete_range(&self, key: &str, range: Range<usize>) -> Result<Self, BufferError> {
        self.replace_range(key, range, "")
    }
}

fn check_range(text: &str, range: &Range<usize>) -> Result<(), BufferError> {
    for offset in [range.start, range.end] {
        if offset > text.len() {
            return Err(BufferError::OutOfBounds {
                offset,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(offset) {
            return Err(BufferError::NotCharBoundary(offset));
        }
    }
    if range.start > range.end {
        return Err(BufferError::OutOfBounds {
            offset: range.start,
            len: text.len(),
        });
    }
    Ok(())
}

/// A caret or range over the buffer.
///
/// Offsets address the block's text; invariant: 0 <= start <= end <= text
/// length of the addressed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    block_key: String,
    start: usize,
    end: usize,
    has_focus: bool,
}

impl Selection {
    /// A collapsed, focused selection at `offset`
    pub fn caret(block_key: impl Into<String>, offset: usize) -> Self {
        Self {
            block_key: block_key.into(),
            start: offset,
            end: offset,
            has_focus: true,
        }
    }

    /// A range selection
    pub fn range(block_key: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            block_key: block_key.into(),
            start,
            end,
            has_focus: true,
        }
    }

    /// Mark the selection as unfocused
    pub fn without_focus(mut self) -> Self {
        self.has_focus = false;
        self
    }

    pub fn block_key(&self) -> &str {
        &self.block_key
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the selection is collapsed to a caret
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_single_line() {
        let buffer = TextBuffer::from_text("hello");
        assert_eq!(buffer.blocks().len(), 1);
        assert_eq!(buffer.blocks()[0].key(), "b0");
        assert_eq!(buffer.blocks()[0].text(), "hello");
        assert_eq!(buffer.version(), 0);
    }

    #[test]
    fn test_from_text_multi_line() {
        let buffer = TextBuffer::from_text("one\ntwo\nthree");
        assert_eq!(buffer.blocks().len(), 3);
        assert_eq!(buffer.block("b1").unwrap().text(), "two");
        assert_eq!(buffer.block("b2").unwrap().text(), "three");
    }

    #[test]
    fn test_block_rejects_line_break() {
        assert!(matches!(
            Block::new("b0", "a\nb"),
            Err(BufferError::LineBreak)
        ));
    }

    #[test]
    fn test_replace_range() {
        let buffer = TextBuffer::from_text("<>ap and more");
        let next = buffer.replace_range("b0", 0..4, "apricot").unwrap();

        assert_eq!(next.block("b0").unwrap().text(), "apricot and more");
        assert_eq!(next.version(), 1);
        // the prior version is untouched
        assert_eq!(buffer.block("b0").unwrap().text(), "<>ap and more");
        assert_eq!(buffer.version(), 0);
    }

    #[test]
    fn test_replace_is_one_version_step() {
        let buffer = TextBuffer::from_text("<>ap");
        let next = buffer.replace_range("b0", 0..4, "apricot").unwrap();
        assert_eq!(next.version(), buffer.version() + 1);
    }

    #[test]
    fn test_delete_range() {
        let buffer = TextBuffer::from_text("abc<>def");
        let next = buffer.delete_range("b0", 3..5).unwrap();
        assert_eq!(next.block("b0").unwrap().text(), "abcdef");
        assert_eq!(next.version(), 1);
    }

    #[test]
    fn test_replace_unknown_block() {
        let buffer = TextBuffer::from_text("abc");
        assert!(matches!(
            buffer.replace_range("nope", 0..1, "x"),
            Err(BufferError::UnknownBlock(_))
        ));
    }

    #[test]
    fn test_replace_out_of_bounds() {
        let buffer = TextBuffer::from_text("abc");
        assert!(matches!(
            buffer.replace_range("b0", 0..10, "x"),
            Err(BufferError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_replace_inverted_range() {
        let buffer = TextBuffer::from_text("abc");
        assert!(buffer.replace_range("b0", 2..1, "x").is_err());
    }

    #[test]
    fn test_replace_not_char_boundary() {
        let buffer = TextBuffer::from_text("aé");
        assert!(matches!(
            buffer.replace_range("b0", 0..2, "x"),
            Err(BufferError::NotCharBoundary(2))
        ));
    }

    #[test]
    fn test_replace_rejects_line_break() {
        let buffer = TextBuffer::from_text("abc");
        assert!(matches!(
            buffer.replace_range("b0", 0..1, "x\ny"),
            Err(BufferError::LineBreak)
        ));
    }

    #[test]
    fn test_selection_caret() {
        let sel = Selection::caret("b0", 3);
        assert_eq!(sel.block_key(), "b0");
        assert_eq!(sel.start(), 3);
        assert_eq!(sel.end(), 3);
        assert!(sel.is_caret());
        assert!(sel.has_focus());
    }

    #[test]
    fn test_selection_range_and_focus() {
        let sel = Selection::range("b1", 1, 4).without_focus();
        assert!(!sel.is_caret());
        assert!(!sel.has_focus());
        assert_eq!(sel.end(), 4);
    }
}
