use super::styles;
use chrono::{DateTime, Utc};
use strikepad::controller::{CmdMessage, MessageLevel};
use strikepad::model::Deletion;
use strikepad::render::DisplaySegment;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        println!("{}", style.apply_to(&message.content));
    }
}

/// The document as it would appear on screen, with each deletion followed
/// by its footnote reference.
pub(super) fn format_rendered(segments: &[DisplaySegment], placeholder: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            DisplaySegment::Text(text) => out.push_str(text),
            DisplaySegment::Placeholder { sequence, .. } => {
                out.push_str(&styles::PLACEHOLDER.apply_to(placeholder).to_string());
                out.push_str(&footnote_ref(*sequence));
            }
            DisplaySegment::Struck { sequence, text, .. } => {
                out.push_str(&styles::STRUCK.apply_to(text).to_string());
                out.push_str(&footnote_ref(*sequence));
            }
        }
    }
    out
}

fn footnote_ref(sequence: u64) -> String {
    styles::FOOTNOTE_REF
        .apply_to(format!("[^{}]", sequence))
        .to_string()
}

pub(super) fn format_log(log: &[&Deletion], now: DateTime<Utc>) -> Vec<String> {
    let seq_width = log
        .iter()
        .map(|d| d.sequence().to_string().len())
        .max()
        .unwrap_or(1);

    log.iter()
        .map(|d| {
            let marker = if d.is_collapsed() {
                COLLAPSED_MARKER
            } else {
                EXPANDED_MARKER
            };
            let idx = format!("{:>width$}. ", d.sequence(), width = seq_width);
            let prefix = format!("  {} ", marker);
            let range = format!("@{}+{} ", d.start(), d.len());

            let fixed = prefix.width() + idx.width() + range.width() + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);

            let preview: String = d
                .deleted_text()
                .chars()
                .map(|c| if c == '\n' { '⏎' } else { c })
                .collect();
            let preview = truncate_to_width(&preview, available);
            let padding = available.saturating_sub(preview.width());

            format!(
                "{}{}{}{}{}{}",
                prefix,
                styles::SEQUENCE.apply_to(idx),
                range,
                preview,
                " ".repeat(padding),
                styles::TIME.apply_to(format_time_ago(d.created_at(), now))
            )
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
