//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    /// Author applied to posts that do not name one
    pub author: String,

    // URL
    pub url: String,
    /// Path segment under which posts are addressed (`/blog/:slug`)
    pub blog_path: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Queries
    pub related_limit: usize,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Sitemap
    pub static_pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AIBlaze".to_string(),
            description: "Learn how to make money smarter, not harder, powered by AI.".to_string(),
            author: "AIBlaze Team".to_string(),

            url: "https://aiblaze.com".to_string(),
            blog_path: "blog".to_string(),

            content_dir: "blogs".to_string(),
            public_dir: "dist/public".to_string(),

            related_limit: 2,

            server: ServerConfig::default(),

            static_pages: [
                "/",
                "/about",
                "/blogs",
                "/contact",
                "/privacy-policy",
                "/terms-and-conditions",
                "/disclaimer",
                "/sitemap",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Public URL path of a post, e.g. `/blog/my-post`
    pub fn post_path(&self, slug: &str) -> String {
        let prefix = self.blog_path.trim_matches('/');
        if prefix.is_empty() {
            format!("/{}", slug)
        } else {
            format!("/{}/{}", prefix, slug)
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}
