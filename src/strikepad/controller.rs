//! # Edit Controller
//!
//! The entry point for every input event. It owns the application state
//! (the [`AnnotationStore`] plus caret and selection) and turns already
//! resolved input events into store mutations.
//!
//! ## What the controller returns
//!
//! Every operation returns a [`CmdResult`]: the deletions it touched,
//! leveled messages for the user, and two hints for the input surface:
//!
//! - `suppress_default`: the surface must not apply its own "remove
//!   characters" behaviour. Deletion keys are always suppressed, so the
//!   document is never shortened through this path.
//! - `refocus`: focus should go back to the editing surface (set after a
//!   toggle).
//!
//! Rejected input (an empty or reversed selection, an unknown id) is never
//! an error. It produces a message and leaves the state unchanged.

use crate::config::StrikeConfig;
use crate::error::StrikeError;
use crate::export;
use crate::model::{Deletion, DeletionId};
use crate::render::{self, DisplaySegment};
use crate::store::AnnotationStore;
use crate::text::char_slice;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Deletion>,
    pub messages: Vec<CmdMessage>,
    pub suppress_default: bool,
    pub refocus: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, deletion: Deletion) -> Self {
        self.affected.push(deletion);
        self
    }

    fn suppressed(mut self) -> Self {
        self.suppress_default = true;
        self
    }

    fn refocused(mut self) -> Self {
        self.refocus = true;
        self
    }
}

/// Keys the controller distinguishes. Anything else passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Backspace,
    Delete,
    #[serde(other)]
    Other,
}

/// Input events consumed from the editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// The whole text was replaced (typing, paste, ...).
    #[serde(rename = "text")]
    TextChanged { text: String, caret: usize },
    #[serde(rename = "select")]
    SelectionChanged { start: usize, end: usize },
    /// An explicit request to delete `[start, end)`.
    #[serde(rename = "delete")]
    DeleteRange { start: usize, end: usize },
    /// A key press, applied to the tracked selection.
    #[serde(rename = "key")]
    KeyPressed { key: Key },
    #[serde(rename = "toggle")]
    ToggleSequence { sequence: u64 },
    #[serde(rename = "toggle_id")]
    Toggle { id: DeletionId },
}

#[derive(Debug, Clone, Default)]
pub struct EditController {
    store: AnnotationStore,
    caret: usize,
    selection: (usize, usize),
}

impl EditController {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            store: AnnotationStore::new(document),
            caret: 0,
            selection: (0, 0),
        }
    }

    /// Read-only view of the application state.
    pub fn state(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> (usize, usize) {
        self.selection
    }

    pub fn handle(&mut self, event: InputEvent) -> CmdResult {
        match event {
            InputEvent::TextChanged { text, caret } => self.text_changed(text, caret),
            InputEvent::SelectionChanged { start, end } => self.selection_changed(start, end),
            InputEvent::DeleteRange { start, end } => self.delete_range(start, end),
            InputEvent::KeyPressed { key } => self.key_pressed(key),
            InputEvent::ToggleSequence { sequence } => self.toggle_sequence(sequence),
            InputEvent::Toggle { id } => self.toggle(id),
        }
    }

    pub fn text_changed(&mut self, text: impl Into<String>, caret: usize) -> CmdResult {
        self.store.replace_document(text);
        self.caret = caret.min(self.store.document_len());
        self.selection = (self.caret, self.caret);
        CmdResult::default()
    }

    pub fn selection_changed(&mut self, start: usize, end: usize) -> CmdResult {
        self.selection = (start, end);
        self.caret = end.min(self.store.document_len());
        CmdResult::default()
    }

    /// Records `[start, end)` of the current document as deleted.
    ///
    /// The document itself is left untouched.
    pub fn delete_range(&mut self, start: usize, end: usize) -> CmdResult {
        let result = CmdResult::default().suppressed();

        if start == end {
            debug!(at = start, "single-position deletion rejected");
            let mut result = result;
            result.add_message(CmdMessage::info(
                "Select some text to delete; single characters are never removed.",
            ));
            return result;
        }
        if start > end {
            warn!(start, end, "reversed selection ignored");
            return result;
        }

        let selected = char_slice(self.store.document(), start, end).to_string();
        match self.store.record_deletion(&selected, start) {
            Some(deletion) => {
                let mut result = result.with_affected(deletion.clone());
                result.add_message(CmdMessage::success(format!(
                    "Deletion {} recorded ({} chars)",
                    deletion.sequence(),
                    deletion.len()
                )));
                result
            }
            None => {
                warn!(start, end, "selection lies outside the document");
                result
            }
        }
    }

    /// Deletion keys act on the tracked selection and are always suppressed.
    pub fn key_pressed(&mut self, key: Key) -> CmdResult {
        match key {
            Key::Backspace | Key::Delete => {
                let (start, end) = self.selection;
                self.delete_range(start, end)
            }
            Key::Other => CmdResult::default(),
        }
    }

    pub fn toggle(&mut self, id: DeletionId) -> CmdResult {
        let result = CmdResult::default().refocused();
        match self.store.toggle_collapse(id) {
            Ok(deletion) => result.with_affected(deletion.clone()),
            Err(e) => Self::not_found(result, e),
        }
    }

    /// Toggles the deletion with the given sequence number.
    pub fn toggle_sequence(&mut self, sequence: u64) -> CmdResult {
        let id = match self.store.find_by_sequence(sequence) {
            Ok(deletion) => deletion.id(),
            Err(e) => return Self::not_found(CmdResult::default().refocused(), e),
        };
        self.toggle(id)
    }

    fn not_found(mut result: CmdResult, err: StrikeError) -> CmdResult {
        warn!(error = %err, "toggle ignored");
        result.add_message(CmdMessage::warning(err.to_string()));
        result
    }

    pub fn render(&self) -> Vec<DisplaySegment> {
        render::render(&self.store)
    }

    pub fn export(&self) -> String {
        export::export(&self.store)
    }

    pub fn export_with(&self, config: &StrikeConfig) -> String {
        export::export_with(&self.store, config)
    }
}
