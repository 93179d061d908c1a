use crate::error::{Result, StrikeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_PLACEHOLDER: &str = "…";
pub const DEFAULT_REDACTION_MARKER: &str = "[ … ]";
pub const DEFAULT_STRIKE_MARKER: &str = "~~";
pub const DEFAULT_FOOTNOTES_HEADING: &str = "## Footnotes";

/// Keys accepted by [`StrikeConfig::get`] and [`StrikeConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "placeholder",
    "redaction-marker",
    "strike-marker",
    "footnotes-heading",
];

/// Presentation and export tokens, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrikeConfig {
    /// Glyph shown on screen in place of a collapsed deletion
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Token written to exports in place of a collapsed deletion
    #[serde(default = "default_redaction_marker")]
    pub redaction_marker: String,

    /// Delimiter wrapped around struck-through text in exports
    #[serde(default = "default_strike_marker")]
    pub strike_marker: String,

    /// Heading line that opens the footnotes block
    #[serde(default = "default_footnotes_heading")]
    pub footnotes_heading: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_redaction_marker() -> String {
    DEFAULT_REDACTION_MARKER.to_string()
}

fn default_strike_marker() -> String {
    DEFAULT_STRIKE_MARKER.to_string()
}

fn default_footnotes_heading() -> String {
    DEFAULT_FOOTNOTES_HEADING.to_string()
}

impl Default for StrikeConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            redaction_marker: default_redaction_marker(),
            strike_marker: default_strike_marker(),
            footnotes_heading: default_footnotes_heading(),
        }
    }
}

impl StrikeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StrikeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "placeholder" => Some(self.placeholder.clone()),
            "redaction-marker" => Some(self.redaction_marker.clone()),
            "strike-marker" => Some(self.strike_marker.clone()),
            "footnotes-heading" => Some(self.footnotes_heading.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(StrikeError::Config(format!("{} cannot be empty", key)));
        }
        let slot = match key {
            "placeholder" => &mut self.placeholder,
            "redaction-marker" => &mut self.redaction_marker,
            "strike-marker" => &mut self.strike_marker,
            "footnotes-heading" => &mut self.footnotes_heading,
            _ => return Err(StrikeError::Config(format!("Unknown config key: {}", key))),
        };
        *slot = value.to_string();
        Ok(())
    }
}
