//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Directory
    pub content_dir: String,

    // Rendering
    pub sanitize_html: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Diagnostics
    pub title_max_length: usize,
    pub description_max_length: usize,

    /// Load ids outside the pre-declared path list instead of reporting them
    /// as not found
    pub fallback: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Beanstalk".to_string(),

            content_dir: "content/posts".to_string(),

            sanitize_html: true,
            highlight: HighlightConfig::default(),

            title_max_length: 55,
            description_max_length: 160,

            fallback: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {:?}", path))?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
