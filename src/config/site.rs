//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::reading::DEFAULT_WORDS_PER_MINUTE;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,
    pub trailing_slash: bool,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    pub date_format: String,
    #[serde(default)]
    pub reading: ReadingConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: String::new(),
            language: "ko".to_string(),

            url: "http://localhost".to_string(),
            root: "/".to_string(),
            trailing_slash: false,

            posts_dir: "posts".to_string(),
            public_dir: "out".to_string(),
            tag_dir: "tags".to_string(),

            date_format: "YYYY-MM-DD".to_string(),
            reading: ReadingConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Reading time estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: usize,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
