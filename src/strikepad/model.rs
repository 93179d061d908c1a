use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a [`Deletion`], stable for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeletionId(Uuid);

impl DeletionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeletionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeletionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded, non-destructive deletion of a span of the base document.
///
/// Everything except `collapsed` is fixed at creation. Offsets and lengths
/// count `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deletion {
    id: DeletionId,
    sequence: u64,
    deleted_text: String,
    start: usize,
    len: usize,
    created_at: DateTime<Utc>,
    collapsed: bool,
}

impl Deletion {
    /// Builds a collapsed deletion. `start` must already be clamped by the caller.
    pub(crate) fn new(sequence: u64, deleted_text: String, start: usize) -> Self {
        let len = deleted_text.chars().count();
        Self {
            id: DeletionId::new(),
            sequence,
            deleted_text,
            start,
            len,
            created_at: Utc::now(),
            collapsed: true,
        }
    }

    pub fn id(&self) -> DeletionId {
        self.id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn deleted_text(&self) -> &str {
        &self.deleted_text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exclusive end offset of the span as captured.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub(crate) fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}
