//! Configuration for the primer CLI.
//!
//! Config files are markdown with YAML frontmatter. Every key is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Project config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".primer/config.md";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub character: CharacterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/primer/config.md)
    /// 2. Project config (.primer/config.md)
    /// 3. Explicit `--config` path, which must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_PATH),
            explicit,
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        PartialConfig::parse(content)?.into_config()
    }

    /// Load merged configuration from the given global, project and explicit paths.
    /// Global and project files are skipped when absent.
    pub fn load_merged_from(
        global_path: Option<&Path>,
        project_path: &Path,
        explicit_path: Option<&Path>,
    ) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let explicit_config = explicit_path
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config
            .merge_with(project_config)
            .merge_with(explicit_config)
            .into_config()?;

        debug!(
            format = %config.output.format,
            color = config.output.color,
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/primer/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/primer/config.md"))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    // The closing fence must start a line
    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub character: Option<PartialCharacterConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialCharacterConfig {
    pub welcome: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes as YAML null
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Layer `over` on top of this config. Values set in `over` win.
    fn merge_with(self, over: PartialConfig) -> PartialConfig {
        let base_character = self.character.unwrap_or_default();
        let base_output = self.output.unwrap_or_default();
        let over_character = over.character.unwrap_or_default();
        let over_output = over.output.unwrap_or_default();

        PartialConfig {
            character: Some(PartialCharacterConfig {
                welcome: over_character.welcome.or(base_character.welcome),
            }),
            output: Some(PartialOutputConfig {
                format: over_output.format.or(base_output.format),
                color: over_output.color.or(base_output.color),
            }),
        }
    }

    /// Fill unset values with defaults and validate the result.
    fn into_config(self) -> Result<Config> {
        let character = self.character.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let config = Config {
            character: CharacterConfig {
                welcome: character.welcome.unwrap_or_else(defaults::default_welcome),
            },
            output: OutputConfig {
                format: output.format.unwrap_or_default(),
                color: output.color.unwrap_or_else(defaults::default_true),
            },
        };

        config.character.validate()?;

        Ok(config)
    }
}
