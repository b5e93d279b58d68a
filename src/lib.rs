//! bean-blog: markdown blog content for a statically generated site
//!
//! Posts live as markdown files with YAML front-matter in a flat content
//! directory. This crate lists them newest first, renders a single post to
//! HTML, and validates it into the flat record a page template consumes.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The blog: configuration plus resolved directories
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post markdown files
    pub content_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
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

    /// Create a Blog with an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// All posts, newest first
    pub fn list_posts(&self) -> content::Result<Vec<content::PostMeta>> {
        content::ContentLoader::new(self).list_posts()
    }

    /// All post identifiers
    pub fn list_post_ids(&self) -> content::Result<Vec<String>> {
        content::ContentLoader::new(self).list_post_ids()
    }

    /// Load and render one post
    pub async fn load_post(&self, id: &str) -> content::Result<content::Post> {
        content::ContentLoader::new(self).load_post(id).await
    }

    /// Build the page record for one post
    pub async fn static_props(&self, id: &str) -> content::Result<generator::StaticProps> {
        generator::Generator::new(self).static_props(id).await
    }
}
