//! Contact message and comment store

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::timestamp_now;

/// A contact form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

/// Contact form payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl NewContactMessage {
    /// Strip surrounding whitespace from every field
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// A reader comment under a post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Id of the post commented on; not checked by the store
    pub blog_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub created_at: String,
}

/// Comment form payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(default)]
    pub blog_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
}

impl NewComment {
    /// Strip surrounding whitespace from every field
    pub fn trimmed(self) -> Self {
        Self {
            blog_id: self.blog_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            comment: self.comment.trim().to_string(),
        }
    }
}

/// In-memory store of contact messages and comments
#[derive(Debug, Default)]
pub struct MessageStore {
    contact_messages: IndexMap<String, ContactMessage>,
    comments: IndexMap<String, Comment>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contact message. Messages are never read back over HTTP.
    pub fn create_contact_message(&mut self, input: NewContactMessage) -> ContactMessage {
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: timestamp_now(),
        };
        tracing::info!("Stored contact message {} from {}", message.id, message.email);
        self.contact_messages
            .insert(message.id.clone(), message.clone());
        message
    }

    pub fn contact_message_count(&self) -> usize {
        self.contact_messages.len()
    }

    /// Record a comment; `blog_id` is taken as given
    pub fn create_comment(&mut self, input: NewComment) -> Comment {
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            blog_id: input.blog_id,
            name: input.name,
            email: input.email,
            comment: input.comment,
            created_at: timestamp_now(),
        };
        tracing::debug!("Stored comment {} on post {}", comment.id, comment.blog_id);
        self.comments.insert(comment.id.clone(), comment.clone());
        comment
    }

    /// Comments on a post, newest first.
    ///
    /// Timestamps share one RFC 3339 UTC format and so compare as strings;
    /// comments created within the same millisecond list the later insert
    /// first.
    pub fn list_comments_by_blog_id(&self, blog_id: &str) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .values()
            .rev()
            .filter(|c| c.blog_id == blog_id)
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}
