//! Create a new post file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::NewBlogPost;
use crate::helpers::today;
use crate::AiBlaze;

/// Write `<content_dir>/blog-<slug>.json` with placeholder text
pub fn create_post(app: &AiBlaze, title: &str, category: &str, featured: bool) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    fs::create_dir_all(&app.content_dir)?;
    let file_path = app.content_dir.join(format!("blog-{}.json", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let post = NewBlogPost {
        slug: slug.clone(),
        title: title.to_string(),
        excerpt: format!("A short summary of {}.", title),
        content: format!("<h2>{}</h2>\n<p>Write your post here.</p>", title),
        author: Some(app.config.author.clone()),
        category: category.to_string(),
        image_path: format!("/generated_images/{}.png", slug),
        read_time: Some(crate::content::DEFAULT_READ_TIME),
        featured: Some(featured),
        published_at: today(),
        ..NewBlogPost::default()
    };

    fs::write(&file_path, serde_json::to_string_pretty(&post)?)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}
