//! Blog post models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContentError;
use crate::helpers::{parse_published_at, parse_published_date};

/// Reading time applied when a post does not state one
pub const DEFAULT_READ_TIME: u32 = 5;

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable identifier, generated when absent from the source file
    pub id: String,

    /// URL-friendly unique name
    pub slug: String,

    pub title: String,

    pub excerpt: String,

    /// HTML body
    pub content: String,

    pub author: String,

    pub category: String,

    /// Hero image, absolute URL or root-relative path
    pub image_path: String,

    /// Reading time in minutes
    pub read_time: u32,

    /// Homepage promotion flag, written as `0`/`1`
    #[serde(serialize_with = "flag::serialize")]
    pub featured: bool,

    /// Publication date exactly as authored
    pub published_at: String,

    /// Parsed form of `published_at` normalized to UTC, used for ordering
    #[serde(skip)]
    pub published_on: NaiveDateTime,

    /// Calendar day of `published_at` in the author's own offset
    #[serde(skip)]
    pub published_date: NaiveDate,
}

/// A blog post as authored on disk or submitted for creation.
///
/// Optional fields receive their defaults in [`NewBlogPost::into_post`],
/// which is the only place defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub category: String,
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(
        default,
        deserialize_with = "flag::deserialize_option",
        serialize_with = "flag::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub featured: Option<bool>,
    pub published_at: String,
}

impl NewBlogPost {
    /// Validate required fields and apply defaults.
    ///
    /// An absent or empty `id` gets a fresh UUID, an absent or empty
    /// `author` becomes `default_author`, a missing or zero `readTime`
    /// becomes [`DEFAULT_READ_TIME`] and `featured` defaults to off.
    pub fn into_post(self, default_author: &str) -> Result<BlogPost, ContentError> {
        let required = [
            ("slug", &self.slug),
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
            ("category", &self.category),
            ("imagePath", &self.image_path),
            ("publishedAt", &self.published_at),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::MissingField(name));
            }
        }

        let invalid_date = || ContentError::InvalidDate(self.published_at.clone());
        let published_on = parse_published_at(&self.published_at).ok_or_else(invalid_date)?;
        let published_date = parse_published_date(&self.published_at).ok_or_else(invalid_date)?;

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let author = self
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| default_author.to_string());

        Ok(BlogPost {
            id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author,
            category: self.category,
            image_path: self.image_path,
            read_time: self
                .read_time
                .filter(|minutes| *minutes > 0)
                .unwrap_or(DEFAULT_READ_TIME),
            featured: self.featured.unwrap_or(false),
            published_at: self.published_at,
            published_on,
            published_date,
        })
    }
}

/// `featured` travels as an integer flag; booleans are accepted on input.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn serialize_option<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        let raw: Option<RawFlag> = Option::deserialize(deserializer)?;
        Ok(raw.map(|raw| match raw {
            RawFlag::Bool(b) => b,
            RawFlag::Int(i) => i != 0,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewBlogPost {
        NewBlogPost {
            slug: "ai-tools".to_string(),
            title: "AI Tools".to_string(),
            excerpt: "Tools".to_string(),
            content: "<p>Body</p>".to_string(),
            category: "AI Tools".to_string(),
            image_path: "/images/ai.png".to_string(),
            published_at: "2025-01-15".to_string(),
            ..NewBlogPost::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let post = sample().into_post("AIBlaze Team").unwrap();
        assert!(Uuid::parse_str(&post.id).is_ok());
        assert_eq!(post.author, "AIBlaze Team");
        assert_eq!(post.read_time, DEFAULT_READ_TIME);
        assert!(!post.featured);
        assert_eq!(post.published_at, "2025-01-15");
    }

    #[test]
    fn test_explicit_values_kept() {
        let mut new_post = sample();
        new_post.id = Some("fixed-id".to_string());
        new_post.author = Some("Jane".to_string());
        new_post.read_time = Some(9);
        new_post.featured = Some(true);

        let post = new_post.into_post("AIBlaze Team").unwrap();
        assert_eq!(post.id, "fixed-id");
        assert_eq!(post.author, "Jane");
        assert_eq!(post.read_time, 9);
        assert!(post.featured);
    }

    #[test]
    fn test_empty_required_field_rejected() {
        let mut new_post = sample();
        new_post.title = "  ".to_string();
        let err = new_post.into_post("AIBlaze Team").unwrap_err();
        assert!(matches!(err, ContentError::MissingField("title")));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut new_post = sample();
        new_post.published_at = "someday".to_string();
        let err = new_post.into_post("AIBlaze Team").unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate(_)));
    }

    #[test]
    fn test_featured_flag_wire_format() {
        let json = r#"{
            "slug": "s", "title": "t", "excerpt": "e", "content": "c",
            "category": "k", "imagePath": "/i.png", "publishedAt": "2025-02-01",
            "featured": 1
        }"#;
        let new_post: NewBlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(new_post.featured, Some(true));

        let as_bool: NewBlogPost =
            serde_json::from_str(&json.replace("\"featured\": 1", "\"featured\": false")).unwrap();
        assert_eq!(as_bool.featured, Some(false));

        let post = new_post.into_post("AIBlaze Team").unwrap();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["featured"], 1);
        assert_eq!(value["imagePath"], "/i.png");
        assert_eq!(value["readTime"], 5);
        assert!(value.get("publishedOn").is_none());
        assert!(value.get("publishedDate").is_none());
    }
}
