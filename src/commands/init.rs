//! Initialize a new site

use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::helpers::today;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("blogs"))?;
    fs::create_dir_all(target_dir.join("dist/public"))?;

    let config_content = r#"# AIBlaze Configuration

# Site
title: AIBlaze
description: Learn how to make money smarter, not harder, powered by AI.
author: AIBlaze Team

# URL
url: https://aiblaze.com
blog_path: blog

# Directory
content_dir: blogs
public_dir: dist/public

# Related posts per article
related_limit: 2

# Server
server:
  ip: 0.0.0.0
  port: 5000

# Sitemap
static_pages:
  - /
  - /about
  - /blogs
  - /contact
  - /privacy-policy
  - /terms-and-conditions
  - /disclaimer
  - /sitemap
"#;

    fs::write(&config_path, config_content)?;

    // Create a sample post
    let sample_post = json!({
        "slug": "hello-world",
        "title": "Hello World",
        "excerpt": "Your very first AIBlaze post.",
        "content": "<h2>Welcome</h2>\n<p>Create a new post with <code>aiblaze new \"My New Post\"</code> and start the server with <code>aiblaze serve</code>.</p>",
        "category": "General",
        "imagePath": "/generated_images/hello-world.png",
        "featured": 1,
        "publishedAt": today(),
    });

    fs::write(
        target_dir.join("blogs/blog-hello-world.json"),
        serde_json::to_string_pretty(&sample_post)?,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use crate::AiBlaze;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        let app = AiBlaze::new(tmp.path()).unwrap();
        assert_eq!(app.config.title, "AIBlaze");
        assert_eq!(app.config.server.port, 5000);

        let posts = ContentLoader::new(&app).load_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert!(posts[0].featured);

        assert!(init_site(tmp.path()).is_err());
    }
}
