//! In-memory stores for posts, comments and contact messages
//!
//! Each store exclusively owns its collection. Stores are plain
//! synchronous structs; the server wraps them in locks.

mod blog;
mod message;

use thiserror::Error;

use crate::content::ContentError;

pub use blog::{BlogQuery, BlogStore, CategorySummary};
pub use message::{Comment, ContactMessage, MessageStore, NewComment, NewContactMessage};

/// Errors raised by store mutations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("A post with slug {0:?} already exists")]
    DuplicateSlug(String),

    #[error("A post with id {0:?} already exists")]
    DuplicateId(String),

    #[error("Invalid post: {0}")]
    InvalidPost(#[from] ContentError),
}
