//! Payload validation for form submissions

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::store::{NewComment, NewContactMessage};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Inbound payloads checked before they reach a store.
///
/// Lengths ignore surrounding whitespace; handlers store the trimmed
/// payload so the checked and stored values agree.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

impl Validate for NewContactMessage {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        min_chars(&mut errors, "name", &self.name, 2, "Name must be at least 2 characters");
        email(&mut errors, &self.email);
        min_chars(
            &mut errors,
            "message",
            &self.message,
            10,
            "Message must be at least 10 characters",
        );
        finish(errors)
    }
}

impl Validate for NewComment {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        min_chars(&mut errors, "blogId", &self.blog_id, 1, "Blog id is required");
        min_chars(&mut errors, "name", &self.name, 2, "Name must be at least 2 characters");
        email(&mut errors, &self.email);
        min_chars(
            &mut errors,
            "comment",
            &self.comment,
            2,
            "Comment must be at least 2 characters",
        );
        finish(errors)
    }
}

fn min_chars(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize, message: &str) {
    if value.trim().chars().count() < min {
        errors.push(FieldError::new(field, message));
    }
}

fn email(errors: &mut Vec<FieldError>, value: &str) {
    if !EMAIL_RE.is_match(value.trim()) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_contact() {
        assert!(contact("Jo Lee", "jo@example.com", "Hello there, testing.")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_invalid_contact_reports_every_field() {
        let errors = contact("J", "not-an-email", "short").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let errors = contact("  J  ", "jo@example.com", "         x         ")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_comment_rules() {
        let ok = NewComment {
            blog_id: "abc".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.org".to_string(),
            comment: "Nice".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing = NewComment {
            comment: "x".to_string(),
            ..NewComment::default()
        };
        let fields: Vec<_> = missing
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["blogId", "name", "email", "comment"]);
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last+tag@sub.example.com"] {
            assert!(EMAIL_RE.is_match(good), "{}", good);
        }
        for bad in ["", "a@b", "@b.co", "a b@c.de", "a@@b.co"] {
            assert!(!EMAIL_RE.is_match(bad), "{}", bad);
        }
    }
}
