//! Content loader - loads blog posts from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{BlogPost, ContentError, NewBlogPost};
use crate::AiBlaze;

/// Loads blog posts from one-JSON-file-per-post content directory
pub struct ContentLoader {
    content_dir: PathBuf,
    default_author: String,
}

impl ContentLoader {
    /// Create a loader for the site's configured content directory
    pub fn new(app: &AiBlaze) -> Self {
        Self::with_dir(&app.content_dir, &app.config.author)
    }

    /// Create a loader for an explicit directory
    pub fn with_dir<P: AsRef<Path>>(content_dir: P, default_author: &str) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            default_author: default_author.to_string(),
        }
    }

    /// Load every `*.json` post, in file-name order.
    ///
    /// Files that fail to parse are logged and skipped.
    pub fn load_posts(&self) -> Vec<BlogPost> {
        if !self.content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", self.content_dir);
            return Vec::new();
        }

        let mut posts = Vec::new();
        let mut skipped = 0usize;

        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    tracing::debug!("Loaded post {:?} from {:?}", post.slug, path);
                    posts.push(post);
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        tracing::info!(
            "Loaded {} posts from {:?} ({} skipped)",
            posts.len(),
            self.content_dir,
            skipped
        );

        posts
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<BlogPost, ContentError> {
        let content = fs::read_to_string(path)?;
        let new_post: NewBlogPost = serde_json::from_str(&content)?;
        new_post.into_post(&self.default_author)
    }
}

/// Check if a file is a visible JSON file
fn is_post_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);

    !hidden
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_post(dir: &Path, file: &str, slug: &str, published_at: &str) {
        let body = json!({
            "slug": slug,
            "title": format!("Title {}", slug),
            "excerpt": "Excerpt",
            "content": "<p>Content</p>",
            "category": "AI Tools",
            "imagePath": "/generated_images/x.png",
            "publishedAt": published_at,
        });
        fs::write(dir.join(file), body.to_string()).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::with_dir(tmp.path().join("nope"), "AIBlaze Team");
        assert!(loader.load_posts().is_empty());
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        for i in 0..9 {
            write_post(
                tmp.path(),
                &format!("blog-{}.json", i),
                &format!("post-{}", i),
                "2025-01-15",
            );
        }
        fs::write(tmp.path().join("blog-broken.json"), "{ \"slug\": ").unwrap();

        let loader = ContentLoader::with_dir(tmp.path(), "AIBlaze Team");
        let posts = loader.load_posts();
        assert_eq!(posts.len(), 9);
    }

    #[test]
    fn test_missing_required_field_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.json", "a", "2025-01-15");
        fs::write(
            tmp.path().join("b.json"),
            json!({"slug": "b", "title": "No body"}).to_string(),
        )
        .unwrap();
        write_post(tmp.path(), "c.json", "c", "not a date");

        let loader = ContentLoader::with_dir(tmp.path(), "AIBlaze Team");
        let posts = loader.load_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "a");
    }

    #[test]
    fn test_file_name_order_and_defaults() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "blog-b.json", "b", "2025-01-01");
        write_post(tmp.path(), "blog-a.json", "a", "2025-02-01");
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(tmp.path().join(".hidden.json"), "{}").unwrap();

        let loader = ContentLoader::with_dir(tmp.path(), "Site Author");
        let posts = loader.load_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
        assert!(posts.iter().all(|p| p.author == "Site Author"));
        assert!(posts.iter().all(|p| p.read_time == 5 && !p.featured));
        assert_ne!(posts[0].id, posts[1].id);
    }
}
