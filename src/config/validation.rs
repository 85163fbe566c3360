//! Validation logic for configuration values.

use anyhow::Result;
use std::fmt;

use super::defaults::{CharacterConfig, OutputFormat};

impl CharacterConfig {
    /// Validate character creator configuration
    pub fn validate(&self) -> Result<()> {
        if self.welcome.trim().is_empty() {
            anyhow::bail!("character.welcome must not be blank");
        }

        Ok(())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Quiet => write!(f, "quiet"),
        }
    }
}
