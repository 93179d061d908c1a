//! # Strikepad Architecture
//!
//! Strikepad is the core of a **non-destructive deletion** editor. Deleting a
//! selection never removes text: the span is recorded as a foldable
//! annotation against the base document, shown either collapsed (a
//! placeholder) or expanded (struck through), and exported to Markdown with
//! footnotes that always reveal what was deleted.
//!
//! Like any UI-agnostic library, the crate never touches the terminal or the
//! filesystem from its core; the `strikepad` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, loads sessions/config, prints output   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Edit Controller (controller.rs)                            │
//! │  - Turns input events into store mutations                  │
//! │  - Returns structured CmdResult values, never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Annotation Store (store.rs)                                │
//! │  - Base document + deletions, sequence numbering            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Projections (overlay.rs → render.rs, export.rs)            │
//! │  - Pure reads over a (document, deletions) snapshot         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Offsets
//!
//! All offsets and lengths count `char`s. Offsets are captured when a
//! deletion is recorded and are never shifted by later edits; projections
//! clamp anything that no longer fits the document.
//!
//! ## Module Overview
//!
//! - [`controller`]: Event handling and the `CmdResult` vocabulary
//! - [`store`]: The annotation store
//! - [`overlay`]: The interval overlay shared by both projections
//! - [`render`]: Data-only display segments
//! - [`export`]: Markdown export with footnotes
//! - [`session`]: JSON event scripts replayed through the controller
//! - [`model`]: Core data types (`Deletion`, `DeletionId`)
//! - [`config`]: Presentation and export tokens
//! - [`error`]: Error types

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod model;
pub mod overlay;
pub mod render;
pub mod session;
pub mod store;
pub mod text;
