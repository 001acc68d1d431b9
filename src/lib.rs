//! aiblaze: content server for the AIBlaze blog
//!
//! Blog posts are authored as one JSON file each and loaded into memory at
//! startup. The server exposes them, together with reader comments and a
//! contact form, as a small JSON API.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

/// The main application: configuration plus resolved directories
#[derive(Clone)]
pub struct AiBlaze {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding one JSON file per post
    pub content_dir: std::path::PathBuf,
    /// Compiled frontend and generated files
    pub public_dir: std::path::PathBuf,
}

impl AiBlaze {
    /// Create a new instance from a directory, reading `_config.yml` if present
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

    /// Create an instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Write the post bundle and sitemap into the public directory
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove generated files
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post file
    pub fn new_post(&self, title: &str, category: &str, featured: bool) -> Result<()> {
        commands::new::create_post(self, title, category, featured).map(|_| ())
    }
}
