use console::Style;
use once_cell::sync::Lazy;

pub static PLACEHOLDER: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static STRUCK: Lazy<Style> = Lazy::new(|| Style::new().red().strikethrough());
pub static FOOTNOTE_REF: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SEQUENCE: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
