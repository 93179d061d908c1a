//! # Overlay
//!
//! Projects a document and a set of deletions into an ordered list of
//! [`Segment`]s. Both the renderer and the exporter are built on this; they
//! differ only in what they substitute for a span.
//!
//! Deletions are sorted by start ascending, then length descending, so the
//! longest of several spans sharing a start is laid down first. A cursor
//! tracks how much of the text has been consumed and never moves backwards:
//! a span that starts before the cursor is truncated to the part past it,
//! and one that ends before the cursor is absorbed (emitted with no text).
//! Spans are therefore never rendered as overlapping, and concatenating all
//! segment texts always gives back the input text.

use crate::model::{Deletion, DeletionId};
use crate::text::boundaries;

/// The part of the text covered by one deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanSegment<'a> {
    pub id: DeletionId,
    pub sequence: u64,
    pub collapsed: bool,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Span(SpanSegment<'a>),
}

impl<'a> Segment<'a> {
    /// The original text this segment covers, ignoring collapse state.
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Literal(text) => text,
            Segment::Span(span) => span.text,
        }
    }
}

/// Lays `notes` over `text`.
pub fn overlay<'a, 'n, I>(text: &'a str, notes: I) -> Vec<Segment<'a>>
where
    I: IntoIterator<Item = &'n Deletion>,
{
    let mut sorted: Vec<&Deletion> = notes.into_iter().collect();
    sorted.sort_by(|a, b| a.start().cmp(&b.start()).then(b.len().cmp(&a.len())));

    let bounds = boundaries(text);
    let n = bounds.len() - 1;

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;

    for note in sorted {
        let start = note.start().min(n);
        let end = start.saturating_add(note.len()).clamp(start, n);

        if start > cursor {
            segments.push(Segment::Literal(slice(text, &bounds, cursor, start)));
        }

        let start = start.max(cursor);
        let end = end.max(start);
        segments.push(Segment::Span(SpanSegment {
            id: note.id(),
            sequence: note.sequence(),
            collapsed: note.is_collapsed(),
            text: slice(text, &bounds, start, end),
        }));
        cursor = end;
    }

    if cursor < n {
        segments.push(Segment::Literal(slice(text, &bounds, cursor, n)));
    }

    segments
}

fn slice<'a>(text: &'a str, bounds: &[usize], from: usize, to: usize) -> &'a str {
    &text[bounds[from]..bounds[to]]
}
