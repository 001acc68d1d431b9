//! Content module - blog post records and the on-disk loader

pub mod loader;
mod post;

use thiserror::Error;

pub use loader::ContentLoader;
pub use post::{BlogPost, NewBlogPost, DEFAULT_READ_TIME};

/// Errors raised while turning a content file into a post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid publishedAt date: {0:?}")]
    InvalidDate(String),
}
