//! Trigger matching against block text
//!
//! Two deliberately different lookups share the trigger pattern. Live
//! detection ([`match_at_caret`]) is right-anchored: it only sees the
//! occurrence ending exactly at the caret. Removal detection
//! ([`first_match`]) scans left to right and returns the first occurrence
//! in the block, wherever the caret is. A second occurrence later in the
//! same line is invisible to removal.

use regex::Regex;
use std::sync::LazyLock;

/// The two-character literal that starts an autocomplete attempt
pub const TRIGGER: &str = "<>";

/// Trigger followed by a word-character run, anchored at the caret
static LIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<>(\w*)$").unwrap());

/// Trigger followed by a word-character run, anywhere in the line
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<>(\w*)").unwrap());

/// A trigger occurrence within a block's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Offset of the trigger's first character
    pub start: usize,
    /// The word-character run after the trigger; may be empty
    pub match_string: String,
}

impl TriggerMatch {
    /// Offset one past the last matched character
    pub fn end(&self) -> usize {
        self.start + TRIGGER.len() + self.match_string.len()
    }
}

/// Match the trigger pattern ending exactly at the caret.
///
/// Applies `<>` followed by zero or more word characters (letters, digits,
/// underscore) anchored to the end of `text[..caret]`. Returns `None` when
/// the caret is out of bounds, not on a character boundary, or no
/// occurrence ends at it.
pub fn match_at_caret(text: &str, caret: usize) -> Option<TriggerMatch> {
    let prefix = text.get(..caret)?;
    let caps = LIVE_REGEX.captures(prefix)?;
    let whole = caps.get(0).unwrap();
    Some(TriggerMatch {
        start: whole.start(),
        match_string: caps[1].to_string(),
    })
}

/// Find the first trigger occurrence anywhere in the text.
///
/// Used by backspace-removal detection, which checks caret containment
/// against the returned span. Intentionally not caret-anchored.
pub fn first_match(text: &str) -> Option<TriggerMatch> {
    let caps = ENTRY_REGEX.captures(text)?;
    let whole = caps.get(0).unwrap();
    Some(TriggerMatch {
        start: whole.start(),
        match_string: caps[1].to_string(),
    })
}
