//! Build configuration loaded from `implindex.toml`.

use crate::emit::OutputFormat;
use crate::error::Result;
use crate::render::{DEFAULT_EXTERN_BASE_URL, DescriptionStyle, RenderOptions, default_extern_roots};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "implindex.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Data file written by `build`.
    pub output: PathBuf,
    pub format: OutputFormat,
    pub style: DescriptionStyle,
    pub extern_base_url: String,
    pub extern_roots: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("implementors.js"),
            format: OutputFormat::Js,
            style: DescriptionStyle::Html,
            extern_base_url: DEFAULT_EXTERN_BASE_URL.to_string(),
            extern_roots: default_extern_roots(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, `implindex.toml` in the current
    /// directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            style: self.style,
            extern_base_url: self.extern_base_url.clone(),
            extern_roots: self.extern_roots.clone(),
        }
    }
}
