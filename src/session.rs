//! Ephemeral autocomplete session state
//!
//! Tracks whether the suggestion list is open, the current match string,
//! the filtered list, and the highlighted index. The session is rebuilt
//! from the buffer on every change event and destroyed the moment the
//! trigger pattern is no longer detected, a suggestion is committed, or an
//! entry is removed.

use crate::types::SuggestionView;

/// State of one autocomplete attempt
#[derive(Debug, Clone, Default)]
pub struct Session {
    active: bool,
    match_string: String,
    filtered: Vec<String>,
    highlighted: usize,
}

impl Session {
    /// A fresh, inactive session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The word-character run typed after the trigger
    pub fn match_string(&self) -> &str {
        &self.match_string
    }

    /// Filtered suggestions in store order
    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    /// Index of the highlighted suggestion; 0 when the list is empty
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// (Re)open the session with a fresh match string and filtered list.
    /// Every recompute resets the highlight to the top of the list.
    pub fn activate(&mut self, match_string: impl Into<String>, filtered: Vec<String>) {
        self.active = true;
        self.match_string = match_string.into();
        self.filtered = filtered;
        self.highlighted = 0;
    }

    /// Close the session and clear the match string
    pub fn deactivate(&mut self) {
        self.active = false;
        self.match_string.clear();
        self.filtered.clear();
        self.highlighted = 0;
    }

    /// Move the highlight up one entry, floored at the top
    pub fn highlight_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move the highlight down one entry, ceilinged at the last entry
    pub fn highlight_down(&mut self) {
        let max = self.filtered.len().saturating_sub(1);
        if self.highlighted < max {
            self.highlighted += 1;
        }
    }

    /// Move the highlight to `index`, clamped to the list bounds
    pub fn set_highlight(&mut self, index: usize) {
        self.highlighted = index.min(self.filtered.len().saturating_sub(1));
    }

    /// The text a select-suggestion command would commit: the highlighted
    /// suggestion, or the raw match string when the list is empty.
    pub fn chosen(&self) -> &str {
        self.filtered
            .get(self.highlighted)
            .map(String::as_str)
            .unwrap_or(&self.match_string)
    }

    /// Snapshot for the suggestion-list UI
    pub fn view(&self) -> SuggestionView {
        SuggestionView {
            active: self.active,
            match_string: self.match_string.clone(),
            suggestions: self.filtered.clone(),
            highlighted: self.highlighted,
        }
    }
}
