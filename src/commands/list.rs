//! List site content

use anyhow::Result;

use crate::content::{BlogPost, ContentLoader};
use crate::store::BlogStore;
use crate::AiBlaze;

/// List site content by type
pub fn run(app: &AiBlaze, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(app).load_posts();
    let store = BlogStore::from_posts(posts, &app.config.author);

    match content_type {
        "post" | "posts" => {
            let posts = store.list_all();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("{}", format_post(post));
            }
        }
        "featured" => {
            let posts = store.list_featured();
            println!("Featured ({}):", posts.len());
            for post in posts {
                println!("{}", format_post(post));
            }
        }
        "category" | "categories" => {
            let categories = store.categories();
            println!("Categories ({}):", categories.len());
            for category in categories {
                println!("  {} ({})", category.name, category.count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, category",
                content_type
            );
        }
    }

    Ok(())
}

fn format_post(post: &BlogPost) -> String {
    format!(
        "  {} - {} [{}]{}",
        post.published_at,
        post.title,
        post.slug,
        if post.featured { " *" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_type() {
        let tmp = TempDir::new().unwrap();
        let app = AiBlaze::new(tmp.path()).unwrap();
        assert!(run(&app, "tags").is_err());
        assert!(run(&app, "posts").is_ok());
    }
}
