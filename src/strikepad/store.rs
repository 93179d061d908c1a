//! # Annotation Store
//!
//! Holds the base document and the set of [`Deletion`]s recorded against it.
//! This is the only place state changes; the renderer and exporter read it.
//!
//! ## Offsets are snapshots
//!
//! A deletion's offset is captured against the document as it was at the
//! moment of deletion. [`AnnotationStore::replace_document`] does not shift
//! or re-validate existing offsets, so after further typing two deletions
//! may point at stale or colliding ranges. Projections clamp such offsets
//! instead of failing.
//!
//! ## Sequence numbers
//!
//! Each recorded deletion takes the next sequence number, starting at 1.
//! Numbers are never reused, and a rejected (empty) deletion does not
//! consume one.

use crate::error::{Result, StrikeError};
use crate::model::{Deletion, DeletionId};
use crate::text::char_len;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct AnnotationStore {
    document: String,
    deletions: Vec<Deletion>,
    next_sequence: u64,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl AnnotationStore {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            deletions: Vec::new(),
            next_sequence: 1,
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Document length in chars.
    pub fn document_len(&self) -> usize {
        char_len(&self.document)
    }

    /// All deletions in insertion order. Consumers that need an order must sort.
    pub fn deletions(&self) -> &[Deletion] {
        &self.deletions
    }

    /// The deletion log, ordered by ascending sequence number.
    pub fn deletions_by_sequence(&self) -> Vec<&Deletion> {
        let mut log: Vec<&Deletion> = self.deletions.iter().collect();
        log.sort_by_key(|d| d.sequence());
        log
    }

    pub fn get(&self, id: DeletionId) -> Option<&Deletion> {
        self.deletions.iter().find(|d| d.id() == id)
    }

    pub fn find_by_sequence(&self, sequence: u64) -> Result<&Deletion> {
        self.deletions
            .iter()
            .find(|d| d.sequence() == sequence)
            .ok_or(StrikeError::SequenceNotFound(sequence))
    }

    /// Records `selected_text` as deleted at `at`.
    ///
    /// Empty text is a no-op and returns `None`. `at` is clamped into
    /// `[0, document_len]`.
    pub fn record_deletion(&mut self, selected_text: &str, at: usize) -> Option<&Deletion> {
        if selected_text.is_empty() {
            trace!(at, "ignoring empty deletion");
            return None;
        }

        let start = at.min(self.document_len());
        let deletion = Deletion::new(self.next_sequence, selected_text.to_string(), start);
        self.next_sequence += 1;

        debug!(
            id = %deletion.id(),
            sequence = deletion.sequence(),
            start,
            len = deletion.len(),
            "deletion recorded"
        );
        self.deletions.push(deletion);
        self.deletions.last()
    }

    /// Flips `collapsed` on the deletion with `id`. Nothing else changes.
    pub fn toggle_collapse(&mut self, id: DeletionId) -> Result<&Deletion> {
        let deletion = self
            .deletions
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or(StrikeError::DeletionNotFound(id))?;
        deletion.toggle();
        debug!(
            %id,
            sequence = deletion.sequence(),
            collapsed = deletion.is_collapsed(),
            "deletion toggled"
        );
        Ok(&*deletion)
    }

    /// Replaces the base document wholesale. Existing offsets are kept as-is.
    pub fn replace_document(&mut self, text: impl Into<String>) {
        self.document = text.into();
        trace!(len = self.document_len(), "document replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deletion_is_a_noop() {
        let mut store = AnnotationStore::new("abc");
        assert!(store.record_deletion("", 1).is_none());
        assert!(store.deletions().is_empty());

        let d = store.record_deletion("b", 1).unwrap();
        assert_eq!(d.sequence(), 1);
    }

    #[test]
    fn sequence_numbers_increase_from_one() {
        let mut store = AnnotationStore::new("The quick brown fox");
        let seqs: Vec<u64> = [("The", 0), ("quick", 4), ("", 2), ("fox", 16)]
            .iter()
            .filter_map(|(t, at)| store.record_deletion(t, *at).map(|d| d.sequence()))
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn new_deletions_start_collapsed() {
        let mut store = AnnotationStore::new("The quick brown fox");
        let d = store.record_deletion("quick ", 4).unwrap();
        assert!(d.is_collapsed());
        assert_eq!(d.start(), 4);
        assert_eq!(d.len(), 6);
    }

    #[test]
    fn offset_is_clamped_to_document_length() {
        let mut store = AnnotationStore::new("short");
        let d = store.record_deletion("xyz", 100).unwrap();
        assert_eq!(d.start(), 5);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut store = AnnotationStore::new("The quick brown fox");
        let before = store.record_deletion("quick ", 4).unwrap().clone();

        let once = store.toggle_collapse(before.id()).unwrap();
        assert!(!once.is_collapsed());

        let twice = store.toggle_collapse(before.id()).unwrap().clone();
        assert_eq!(twice, before);
    }

    #[test]
    fn toggle_unknown_id_reports_not_found() {
        let mut store = AnnotationStore::new("abc");
        store.record_deletion("a", 0);
        let unknown = DeletionId::new();
        assert!(matches!(
            store.toggle_collapse(unknown),
            Err(StrikeError::DeletionNotFound(id)) if id == unknown
        ));
        assert!(store.deletions()[0].is_collapsed());
    }

    #[test]
    fn get_finds_deletion_by_id() {
        let mut store = AnnotationStore::new("The quick brown fox");
        let id = store.record_deletion("quick ", 4).unwrap().id();
        store.record_deletion("fox", 16);

        assert_eq!(store.get(id).unwrap().deleted_text(), "quick ");
        assert!(store.get(DeletionId::new()).is_none());
    }

    #[test]
    fn replace_document_keeps_offsets() {
        let mut store = AnnotationStore::new("hello world");
        store.record_deletion("world", 6);
        store.replace_document("hi");
        assert_eq!(store.document(), "hi");
        assert_eq!(store.deletions()[0].start(), 6);
    }

    #[test]
    fn log_is_ordered_by_sequence() {
        let mut store = AnnotationStore::new("abcdef");
        store.record_deletion("ef", 4);
        store.record_deletion("ab", 0);
        let log: Vec<u64> = store
            .deletions_by_sequence()
            .iter()
            .map(|d| d.sequence())
            .collect();
        assert_eq!(log, vec![1, 2]);
        assert_eq!(store.find_by_sequence(2).unwrap().deleted_text(), "ab");
        assert!(store.find_by_sequence(9).is_err());
    }
}
