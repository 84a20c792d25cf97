//! tag-autocomplete: Trigger-based inline autocomplete for block-structured
//! text editors
//!
//! Detects the `<>` trigger while the user types, tracks the growing match
//! string behind the caret, keeps a debounced, prefix-filtered suggestion
//! list, and performs the two buffer mutations of the protocol: committing
//! a suggestion over the trigger range and removing a whole autocompleted
//! entry on backspace.
//!
//! # Example
//!
//! ```
//! use tag_autocomplete::{AutocompleteEngine, Command, Selection, TextBuffer};
//!
//! let mut engine = AutocompleteEngine::new();
//! let buffer = TextBuffer::from_text("<>ap");
//! let selection = Selection::caret("b0", 4);
//!
//! // a change event opens the session and filters the store
//! engine.on_change(&buffer, &selection, 0);
//! assert_eq!(engine.suggestions().suggestions, vec!["apple", "apricot"]);
//!
//! // Enter commits the highlighted suggestion over the trigger range
//! let outcome = engine.on_command(Command::SelectSuggestion, &buffer, &selection);
//! let mutation = outcome.mutation.unwrap();
//! assert_eq!(mutation.buffer.block("b0").unwrap().text(), "apple");
//! ```

pub mod buffer;
pub mod debounce;
pub mod decorator;
pub mod editor;
pub mod loader;
pub mod matcher;
pub mod session;
pub mod store;
pub mod types;

pub use buffer::{Block, BufferError, Selection, TextBuffer};
pub use debounce::{Debouncer, Tick, DEFAULT_DELAY};
pub use loader::{LoadError, SeedConfig, DEFAULT_SUGGESTIONS};
pub use matcher::{TriggerMatch, TRIGGER};
pub use session::Session;
pub use store::SuggestionStore;
pub use types::{Command, CommandOutcome, DecoratedRange, Mutation, SuggestionView};

/// Main autocomplete engine.
///
/// Owns the suggestion store, the debouncer, and the ephemeral session.
/// The host forwards buffer-change events to [`on_change`], key commands
/// to [`on_command`], and drives time through [`poll`]; mutations come
/// back as values for the host to adopt.
///
/// [`on_change`]: AutocompleteEngine::on_change
/// [`on_command`]: AutocompleteEngine::on_command
/// [`poll`]: AutocompleteEngine::poll
#[derive(Debug)]
pub struct AutocompleteEngine {
    store: SuggestionStore,
    debouncer: Debouncer,
    session: Session,
    disposed: bool,
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteEngine {
    /// Create an engine with the built-in seed list and default delay
    pub fn new() -> Self {
        Self::from_config(SeedConfig::default())
    }

    /// Create an engine from seed configuration
    pub fn from_config(config: SeedConfig) -> Self {
        Self {
            store: SuggestionStore::with_seed(config.suggestions),
            debouncer: Debouncer::new(config.debounce_delay),
            session: Session::new(),
            disposed: false,
        }
    }

    /// Replace the suggestion store
    pub fn with_store(mut self, store: SuggestionStore) -> Self {
        self.store = store;
        self
    }

    /// The current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The suggestion store
    pub fn store(&self) -> &SuggestionStore {
        &self.store
    }

    /// Snapshot of the suggestion list for the UI
    pub fn suggestions(&self) -> SuggestionView {
        self.session.view()
    }

    /// Handle a buffer-change event.
    ///
    /// Runs trigger detection on the addressed block's text up to the
    /// caret. A match (re)activates the session, refilters the store, and
    /// feeds the match string to the debouncer; no match deactivates the
    /// session. When the selection has lost focus, detection is skipped
    /// and the session persists as-is.
    pub fn on_change(&mut self, buffer: &TextBuffer, selection: &Selection, now: Tick) {
        if self.disposed || !selection.has_focus() {
            return;
        }

        let found = buffer
            .block(selection.block_key())
            .and_then(|block| matcher::match_at_caret(block.text(), selection.start()));

        match found {
            Some(m) => {
                self.debouncer.submit(m.match_string.clone(), now);
                let filtered = self.store.filter(&m.match_string);
                self.session.activate(m.match_string, filtered);
            }
            None => self.session.deactivate(),
        }
    }

    /// Drive the debouncer.
    ///
    /// When a match string has stayed unchanged for the full delay it is
    /// learned into the store; the settled value is returned. A settle
    /// for a value the user has since typed past only attempts an
    /// idempotent append.
    pub fn poll(&mut self, now: Tick) -> Option<String> {
        if self.disposed {
            return None;
        }
        let settled = self.debouncer.poll(now)?;
        self.store.learn(&settled);
        Some(settled)
    }

    /// Execute a key command against the current state.
    ///
    /// Returns whether the command was consumed and, for commit/removal,
    /// the buffer mutation the host should adopt. Unconsumed commands
    /// fall through to the host's default handling.
    pub fn on_command(
        &mut self,
        command: Command,
        buffer: &TextBuffer,
        selection: &Selection,
    ) -> CommandOutcome {
        if self.disposed {
            return CommandOutcome::not_handled();
        }
        match command {
            Command::UpArrow => {
                if !self.session.is_active() {
                    return CommandOutcome::not_handled();
                }
                self.session.highlight_up();
                CommandOutcome::handled()
            }
            Command::DownArrow => {
                if !self.session.is_active() {
                    return CommandOutcome::not_handled();
                }
                self.session.highlight_down();
                CommandOutcome::handled()
            }
            Command::SelectSuggestion => {
                if !self.session.is_active() {
                    return CommandOutcome::not_handled();
                }
                let chosen = self.session.chosen().to_string();
                self.commit(&chosen, buffer, selection)
            }
            Command::Backspace => match editor::remove_entry(buffer, selection) {
                Some(mutation) => {
                    self.session.deactivate();
                    CommandOutcome::with_mutation(mutation)
                }
                None => CommandOutcome::not_handled(),
            },
        }
    }

    /// Commit a suggestion picked directly from the list (mouse path).
    ///
    /// Functionally identical to [`Command::SelectSuggestion`] but takes
    /// the clicked text instead of the highlighted entry.
    pub fn select_suggestion(
        &mut self,
        text: &str,
        buffer: &TextBuffer,
        selection: &Selection,
    ) -> CommandOutcome {
        if self.disposed || !self.session.is_active() {
            return CommandOutcome::not_handled();
        }
        self.commit(text, buffer, selection)
    }

    /// Move the highlight to the hovered list entry, clamped to bounds
    pub fn hover_highlight(&mut self, index: usize) {
        if self.session.is_active() {
            self.session.set_highlight(index);
        }
    }

    /// Cancel the pending debounce and detach the engine.
    ///
    /// After disposal every event is a no-op, so a settle scheduled
    /// before teardown can never touch the store.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.session.deactivate();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn commit(&mut self, text: &str, buffer: &TextBuffer, selection: &Selection) -> CommandOutcome {
        let mutation = editor::commit_entry(buffer, selection, text);
        self.session.deactivate();
        match mutation {
            Some(mutation) => CommandOutcome::with_mutation(mutation),
            // no locatable trigger: nothing to mutate, but the command
            // was consumed and the stale session is closed
            None => CommandOutcome::handled(),
        }
    }
}
