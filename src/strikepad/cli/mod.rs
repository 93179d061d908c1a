//! # CLI Layer
//!
//! One client of the strikepad library. This is the only place that knows
//! about stdout/stderr, files and exit codes. Sessions are loaded here,
//! replayed through the controller, and the resulting state is printed or
//! exported.

mod commands;
mod print;
mod setup;
mod styles;

pub use commands::run;
