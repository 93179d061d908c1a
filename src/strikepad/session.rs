//! Replayable session scripts.
//!
//! A session is a starting document plus a list of [`InputEvent`]s, read from
//! JSON. Replaying it drives a fresh [`EditController`] exactly as the editing
//! surface would. Nothing is written back; a session is input, not storage.
//!
//! ```json
//! {
//!   "document": "The quick brown fox",
//!   "events": [
//!     { "type": "select", "start": 4, "end": 10 },
//!     { "type": "key", "key": "backspace" },
//!     { "type": "toggle", "sequence": 1 }
//!   ]
//! }
//! ```

use crate::controller::{CmdMessage, EditController, InputEvent};
use crate::error::{Result, StrikeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// The controller after a replay, with every message the events produced.
#[derive(Debug)]
pub struct Replay {
    pub controller: EditController,
    pub messages: Vec<CmdMessage>,
}

impl Session {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| StrikeError::Session(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Treats plain text as a session with no events.
    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            events: Vec::new(),
        }
    }

    pub fn replay(self) -> Replay {
        let mut controller = EditController::new(self.document);
        let mut messages = Vec::new();
        for (i, event) in self.events.into_iter().enumerate() {
            tracing::trace!(step = i + 1, ?event, "replaying event");
            messages.extend(controller.handle(event).messages);
        }
        Replay {
            controller,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = r#"{
        "document": "The quick brown fox",
        "events": [
            { "type": "select", "start": 4, "end": 10 },
            { "type": "key", "key": "backspace" },
            { "type": "delete", "start": 2, "end": 2 }
        ]
    }"#;

    #[test]
    fn replay_applies_events_in_order() {
        let replay = Session::parse(FOX).unwrap().replay();
        let state = replay.controller.state();

        assert_eq!(state.deletions().len(), 1);
        assert_eq!(state.deletions()[0].deleted_text(), "quick ");
        assert_eq!(replay.messages.len(), 2);
        assert_eq!(
            replay.controller.export(),
            "The [ … ]brown fox\n\n## Footnotes\n[^1]: ~~quick ~~\n"
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let session = Session::parse("{}").unwrap();
        assert_eq!(session, Session::default());
        assert_eq!(session.replay().controller.export(), "");
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        assert!(matches!(
            Session::parse("{ not json"),
            Err(StrikeError::Serialization(_))
        ));
    }

    #[test]
    fn load_reports_path_on_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        match Session::load(&missing) {
            Err(StrikeError::Session(msg)) => assert!(msg.contains("nope.json")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, FOX).unwrap();
        assert_eq!(Session::load(&path).unwrap().events.len(), 3);
    }
}
