//! # Overlay Renderer
//!
//! Turns the overlay into display segments for an on-screen view. Segments
//! are plain data: the presentation layer decides how a placeholder or a
//! struck span looks and binds activation to
//! [`AnnotationStore::toggle_collapse`](crate::store::AnnotationStore::toggle_collapse).

use crate::model::DeletionId;
use crate::overlay::{overlay, Segment};
use crate::store::AnnotationStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    /// Unmodified document text.
    Text(String),
    /// A collapsed deletion, shown as a single placeholder glyph.
    Placeholder {
        id: DeletionId,
        sequence: u64,
        covered: String,
    },
    /// An expanded deletion, shown as struck-through text.
    Struck {
        id: DeletionId,
        sequence: u64,
        text: String,
    },
}

impl DisplaySegment {
    pub fn deletion_id(&self) -> Option<DeletionId> {
        match self {
            DisplaySegment::Text(_) => None,
            DisplaySegment::Placeholder { id, .. } | DisplaySegment::Struck { id, .. } => Some(*id),
        }
    }

    /// The document text under this segment, whatever its display state.
    pub fn covered_text(&self) -> &str {
        match self {
            DisplaySegment::Text(text) => text,
            DisplaySegment::Placeholder { covered, .. } => covered,
            DisplaySegment::Struck { text, .. } => text,
        }
    }

    /// Accessible label for interactive segments.
    pub fn label(&self) -> Option<String> {
        match self {
            DisplaySegment::Text(_) => None,
            DisplaySegment::Placeholder { sequence, .. } => {
                Some(format!("deletion {}, collapsed", sequence))
            }
            DisplaySegment::Struck { sequence, .. } => {
                Some(format!("deletion {}, expanded", sequence))
            }
        }
    }
}

pub fn render(state: &AnnotationStore) -> Vec<DisplaySegment> {
    overlay(state.document(), state.deletions())
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => DisplaySegment::Text(text.to_string()),
            Segment::Span(span) if span.collapsed => DisplaySegment::Placeholder {
                id: span.id,
                sequence: span.sequence,
                covered: span.text.to_string(),
            },
            Segment::Span(span) => DisplaySegment::Struck {
                id: span.id,
                sequence: span.sequence,
                text: span.text.to_string(),
            },
        })
        .collect()
}
