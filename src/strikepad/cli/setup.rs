use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "strikepad", bin_name = "strikepad", version)]
#[command(about = "Delete text without losing it: render and export struck-out drafts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a session's document with deletions folded or struck through
    #[command(alias = "r")]
    Render {
        /// Session script (.json) or a plain text document
        session: PathBuf,
    },

    /// Export a session as Markdown with footnotes
    #[command(alias = "x")]
    Export {
        /// Session script (.json) or a plain text document
        session: PathBuf,

        /// Output file (defaults to a timestamped name in the current directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the export instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List recorded deletions by sequence number
    #[command(alias = "ls")]
    Log {
        /// Session script (.json) or a plain text document
        session: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., redaction-marker)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
