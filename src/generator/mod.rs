//! Static output - aggregated post bundle and XML sitemap

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{BlogPost, ContentLoader};
use crate::helpers::{date_w3c, full_url_for, post_url};
use crate::store::BlogStore;
use crate::AiBlaze;

/// Bundle consumed by the frontend when no API is reachable
pub const BLOGS_BUNDLE_FILE: &str = "blogs-data.json";
/// Static copy of the sitemap
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Writes generated files into the public directory
pub struct Generator<'a> {
    app: &'a AiBlaze,
}

impl<'a> Generator<'a> {
    pub fn new(app: &'a AiBlaze) -> Self {
        Self { app }
    }

    /// Load content and write every generated file
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let posts = ContentLoader::new(self.app).load_posts();
        let store = BlogStore::from_posts(posts, &self.app.config.author);
        let posts = store.list_all();

        fs::create_dir_all(&self.app.public_dir)?;

        let bundle_path = self.app.public_dir.join(BLOGS_BUNDLE_FILE);
        fs::write(&bundle_path, serde_json::to_string_pretty(&posts)?)?;
        tracing::info!("Generated {} with {} posts", BLOGS_BUNDLE_FILE, posts.len());

        let sitemap_path = self.app.public_dir.join(SITEMAP_FILE);
        fs::write(&sitemap_path, sitemap_xml(&self.app.config, &posts))?;
        tracing::info!("Generated {}", SITEMAP_FILE);

        Ok(vec![bundle_path, sitemap_path])
    }

    /// Paths `generate` writes, whether or not they exist yet
    pub fn outputs(&self) -> Vec<PathBuf> {
        vec![
            self.app.public_dir.join(BLOGS_BUNDLE_FILE),
            self.app.public_dir.join(SITEMAP_FILE),
        ]
    }
}

/// Render the sitemap: static pages first, then one entry per post in the
/// order given.
pub fn sitemap_xml(config: &SiteConfig, posts: &[&BlogPost]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for page in &config.static_pages {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&full_url_for(config, page))
        ));
        xml.push_str("  </url>\n");
    }

    for post in posts {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&post_url(config, &post.slug))
        ));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            date_w3c(&post.published_date)
        ));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
