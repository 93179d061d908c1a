//! Exports must read as Markdown: struck text parses as strikethrough and the
//! footnotes block opens with a level-2 heading.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use strikepad::controller::EditController;

fn struck_texts(markdown: &str) -> Vec<String> {
    let mut struck = Vec::new();
    let mut current: Option<String> = None;
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Strikethrough) => current = Some(String::new()),
            Event::End(TagEnd::Strikethrough) => struck.extend(current.take()),
            Event::Text(text) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            _ => {}
        }
    }
    struck
}

#[test]
fn expanded_and_footnote_text_parse_as_strikethrough() {
    let mut ctl = EditController::new("The quick brown fox");
    ctl.delete_range(4, 9);
    ctl.toggle_sequence(1);

    let exported = ctl.export();
    assert_eq!(struck_texts(&exported), vec!["quick", "quick"]);
}

#[test]
fn footnotes_heading_is_h2() {
    let mut ctl = EditController::new("The quick brown fox");
    ctl.delete_range(4, 10);

    let exported = ctl.export();
    let has_h2 = Parser::new(&exported).any(|event| {
        matches!(
            event,
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            })
        )
    });
    assert!(has_h2);
}

#[test]
fn collapsed_body_has_no_strikethrough() {
    let mut ctl = EditController::new("keep this, drop that");
    ctl.delete_range(10, 20);

    let exported = ctl.export();
    let (body, _) = exported.split_once("## Footnotes").unwrap();
    assert!(struck_texts(body).is_empty());
    assert_eq!(body.trim_end(), "keep this,[ … ]");
}

#[test]
fn stale_expanded_deletion_does_not_open_code_block() {
    let mut ctl = EditController::new("abc\nxyz");
    ctl.delete_range(4, 7);
    ctl.toggle_sequence(1);
    ctl.text_changed("abc\n", 4);

    let exported = ctl.export();
    let mut code_block = false;
    let mut h2 = false;
    for event in Parser::new_ext(&exported, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_block = true,
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => h2 = true,
            _ => {}
        }
    }
    assert!(!code_block, "{exported}");
    assert!(h2, "{exported}");
}
