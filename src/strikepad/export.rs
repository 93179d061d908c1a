//! # Exporter
//!
//! Serializes the annotated document to Markdown-flavoured text.
//!
//! Collapsed deletions become a redaction marker, expanded ones keep their
//! text between strikethrough delimiters. When any deletion exists the body
//! is followed by a footnotes block listing every deletion by sequence
//! number with its original text, whatever its current display state:
//!
//! ```text
//! The [ … ]brown fox
//!
//! ## Footnotes
//! [^1]: ~~quick ~~
//! ```

use crate::config::StrikeConfig;
use crate::overlay::{overlay, Segment};
use crate::store::AnnotationStore;
use chrono::{DateTime, Utc};

/// Exports with the default tokens.
pub fn export(state: &AnnotationStore) -> String {
    export_with(state, &StrikeConfig::default())
}

pub fn export_with(state: &AnnotationStore, config: &StrikeConfig) -> String {
    let strike = |text: &str| format!("{0}{1}{0}", config.strike_marker, text);

    let mut out = String::with_capacity(state.document().len());
    for segment in overlay(state.document(), state.deletions()) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Span(span) if span.collapsed => out.push_str(&config.redaction_marker),
            // An empty strike would read as a code fence at line start.
            Segment::Span(span) if span.text.is_empty() => {}
            Segment::Span(span) => out.push_str(&strike(span.text)),
        }
    }

    let log = state.deletions_by_sequence();
    if log.is_empty() {
        return out;
    }

    out.push_str("\n\n");
    out.push_str(&config.footnotes_heading);
    out.push('\n');
    for deletion in log {
        out.push_str(&format!(
            "[^{}]: {}\n",
            deletion.sequence(),
            strike(deletion.deleted_text())
        ));
    }
    out
}

/// Default file name for a downloaded export.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("strikepad-{}.md", now.format("%Y-%m-%d_%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fox() -> AnnotationStore {
        let mut store = AnnotationStore::new("The quick brown fox");
        store.record_deletion("quick ", 4);
        store
    }

    #[test]
    fn no_deletions_exports_document_verbatim() {
        let store = AnnotationStore::new("Nothing struck here.\n");
        assert_eq!(export(&store), "Nothing struck here.\n");
    }

    #[test]
    fn collapsed_deletion_exports_redaction_marker() {
        assert_eq!(
            export(&fox()),
            "The [ … ]brown fox\n\n## Footnotes\n[^1]: ~~quick ~~\n"
        );
    }

    #[test]
    fn expanded_deletion_exports_strikethrough() {
        let mut store = fox();
        let id = store.deletions()[0].id();
        store.toggle_collapse(id).unwrap();

        assert_eq!(
            export(&store),
            "The ~~quick ~~brown fox\n\n## Footnotes\n[^1]: ~~quick ~~\n"
        );
    }

    #[test]
    fn footnotes_follow_sequence_and_keep_original_text() {
        let mut store = AnnotationStore::new("abcdef");
        store.record_deletion("ef", 4);
        store.record_deletion("bcd", 1);
        store.record_deletion("cd", 2);

        let out = export(&store);
        let (body, notes) = out.split_once("\n\n## Footnotes\n").unwrap();
        assert_eq!(body, "a[ … ][ … ][ … ]");
        assert_eq!(notes, "[^1]: ~~ef~~\n[^2]: ~~bcd~~\n[^3]: ~~cd~~\n");
    }

    #[test]
    fn expanded_deletion_shrunk_to_nothing_is_left_out_of_body() {
        let mut store = AnnotationStore::new("abc\nxyz");
        let id = store.record_deletion("xyz", 4).unwrap().id();
        store.toggle_collapse(id).unwrap();
        store.replace_document("abc\n");

        assert_eq!(
            export(&store),
            "abc\n\n\n## Footnotes\n[^1]: ~~xyz~~\n"
        );
    }

    #[test]
    fn expanded_deletion_absorbed_by_another_span_is_left_out_of_body() {
        let mut store = AnnotationStore::new("abcdef");
        store.record_deletion("bcde", 1);
        let inner = store.record_deletion("cd", 2).unwrap().id();
        store.toggle_collapse(inner).unwrap();

        let out = export(&store);
        let (body, _) = out.split_once("\n\n## Footnotes\n").unwrap();
        assert_eq!(body, "a[ … ]f");
        assert!(!out.contains("~~~~"));
    }

    #[test]
    fn export_is_idempotent() {
        let mut store = fox();
        store.record_deletion("fox", 16);
        assert_eq!(export(&store), export(&store));
    }

    #[test]
    fn custom_tokens_are_used() {
        let config = StrikeConfig {
            redaction_marker: "[redacted]".into(),
            strike_marker: "--".into(),
            footnotes_heading: "### Deleted".into(),
            ..StrikeConfig::default()
        };
        assert_eq!(
            export_with(&fox(), &config),
            "The [redacted]brown fox\n\n### Deleted\n[^1]: --quick --\n"
        );
    }

    #[test]
    fn filename_is_timestamped() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(export_filename(now), "strikepad-2024-03-09_14-05-07.md");
    }
}
