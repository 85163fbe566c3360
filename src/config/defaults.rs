//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(
    default_welcome,
    String,
    "Welcome to the RPG Character Creator!".to_string()
);
default_fn!(default_true, bool, true);

/// Character creator settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CharacterConfig {
    /// Banner printed before the prompts
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
        }
    }
}

/// How command results and status lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with coloured status prefixes
    #[default]
    Human,
    /// One JSON object per line
    Json,
    /// Results only, no banners or prompts
    Quiet,
}

/// Output settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Colour status prefixes when writing to a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}
