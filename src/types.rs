//! Core types for tag-autocomplete

use crate::buffer::{Selection, TextBuffer};
use serde::{Deserialize, Serialize};

/// Editor command tokens the autocomplete engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the highlight up in the suggestion list
    UpArrow,
    /// Move the highlight down in the suggestion list
    DownArrow,
    /// Commit the highlighted suggestion (Enter/Tab)
    SelectSuggestion,
    /// Remove a whole autocompleted entry
    Backspace,
}

impl Command {
    /// Map a raw key name to a command token.
    ///
    /// Unrecognized keys return `None` and fall through to the host
    /// editor's default handling.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::UpArrow),
            "ArrowDown" => Some(Self::DownArrow),
            "Enter" | "Tab" => Some(Self::SelectSuggestion),
            "Backspace" => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// A buffer mutation produced by committing or removing an entry.
///
/// The host adopts both fields as its new current version; the previous
/// buffer value is untouched and stays valid for undo history.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub buffer: TextBuffer,
    pub selection: Selection,
}

/// Result of executing a command against the engine
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Whether the command was consumed (native handling is suppressed)
    pub handled: bool,
    /// Buffer mutation for the host to apply, if any
    pub mutation: Option<Mutation>,
}

impl CommandOutcome {
    /// A handled command with no buffer mutation
    pub fn handled() -> Self {
        Self {
            handled: true,
            mutation: None,
        }
    }

    /// An unhandled command; the host's default behavior proceeds
    pub fn not_handled() -> Self {
        Self {
            handled: false,
            mutation: None,
        }
    }

    /// A handled command carrying a buffer mutation
    pub fn with_mutation(mutation: Mutation) -> Self {
        Self {
            handled: true,
            mutation: Some(mutation),
        }
    }
}

/// A decorated range within a block's text.
///
/// Derived fresh on every render pass; never stored between edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedRange {
    /// Start offset within the block text
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// The decorated substring
    pub text: String,
}

/// Snapshot of the suggestion list shown to the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionView {
    /// Whether the list is currently open
    pub active: bool,
    /// The word-character run typed after the trigger
    #[serde(rename = "matchString")]
    pub match_string: String,
    /// Filtered suggestions in store order
    pub suggestions: Vec<String>,
    /// Index of the highlighted suggestion
    pub highlighted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_key() {
        assert_eq!(Command::from_key("ArrowUp"), Some(Command::UpArrow));
        assert_eq!(Command::from_key("ArrowDown"), Some(Command::DownArrow));
        assert_eq!(Command::from_key("Enter"), Some(Command::SelectSuggestion));
        assert_eq!(Command::from_key("Tab"), Some(Command::SelectSuggestion));
        assert_eq!(Command::from_key("Backspace"), Some(Command::Backspace));
    }

    #[test]
    fn test_command_from_key_passthrough() {
        assert_eq!(Command::from_key("a"), None);
        assert_eq!(Command::from_key("Escape"), None);
        assert_eq!(Command::from_key("ArrowLeft"), None);
        assert_eq!(Command::from_key(""), None);
    }

    #[test]
    fn test_outcome_constructors() {
        let outcome = CommandOutcome::handled();
        assert!(outcome.handled);
        assert!(outcome.mutation.is_none());

        let outcome = CommandOutcome::not_handled();
        assert!(!outcome.handled);
        assert!(outcome.mutation.is_none());
    }

    #[test]
    fn test_decorated_range_serialization() {
        let range = DecoratedRange {
            start: 3,
            end: 8,
            text: "<>ab".to_string(),
        };
        let json = serde_json::to_string(&range).unwrap();
        assert!(json.contains("\"start\":3"));
        assert!(json.contains("\"text\":\"<>ab\""));
    }

    #[test]
    fn test_suggestion_view_serialization() {
        let view = SuggestionView {
            active: true,
            match_string: "ap".to_string(),
            suggestions: vec!["apple".to_string(), "apricot".to_string()],
            highlighted: 1,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"matchString\":\"ap\""));
        assert!(json.contains("\"highlighted\":1"));
    }
}
