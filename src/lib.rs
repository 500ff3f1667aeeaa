//! postdex: content loader and indexer for a markdown blog
//!
//! Posts are markdown files with a front-matter block in a single directory.
//! [`content::ContentLoader`] discovers them, parses their metadata and
//! answers the queries a page renderer needs: all posts newest first, a post
//! by slug, posts by tag and the tag list.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
    /// Export (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open the site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        }
    }

    /// Loader over this site's posts directory
    pub fn loader(&self) -> content::ContentLoader {
        content::ContentLoader::new(&self.posts_dir)
            .with_words_per_minute(self.config.reading.words_per_minute)
    }

    /// Export posts and tag data for static pages
    pub fn export(&self) -> Result<commands::export::ExportSummary> {
        commands::export::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.posts_dir, tmp.path().join("posts"));
        assert_eq!(site.public_dir, tmp.path().join("out"));
    }

    #[test]
    fn test_new_reads_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "posts_dir: content/blog\npublic_dir: dist\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.posts_dir, tmp.path().join("content/blog"));
        assert_eq!(site.public_dir, tmp.path().join("dist"));
        assert_eq!(site.loader().posts_dir(), tmp.path().join("content/blog"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "posts_dir: [\n").unwrap();
        assert!(Site::new(tmp.path()).is_err());
    }
}
