//! Blog store

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::StoreError;
use crate::content::{BlogPost, NewBlogPost};

/// Filters accepted by [`BlogStore::search`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    /// Exact category name, compared case-insensitively
    pub category: Option<String>,
    /// Free text matched against title, excerpt and category
    pub q: Option<String>,
}

impl BlogQuery {
    fn is_empty(&self) -> bool {
        non_blank(&self.category).is_none() && non_blank(&self.q).is_none()
    }

    fn matches(&self, post: &BlogPost) -> bool {
        if let Some(category) = non_blank(&self.category) {
            if !post.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(q) = non_blank(&self.q) {
            let needle = q.to_lowercase();
            let hit = [&post.title, &post.excerpt, &post.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// A category and the number of posts filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// In-memory collection of blog posts, kept in insertion order
#[derive(Debug, Default)]
pub struct BlogStore {
    /// Posts keyed by id
    posts: IndexMap<String, BlogPost>,
    /// Slug -> id
    slugs: HashMap<String, String>,
    default_author: String,
}

impl BlogStore {
    /// Create an empty store
    pub fn new(default_author: &str) -> Self {
        Self {
            posts: IndexMap::new(),
            slugs: HashMap::new(),
            default_author: default_author.to_string(),
        }
    }

    /// Build a store from loaded posts.
    ///
    /// The first post to claim a slug or id wins; later duplicates are
    /// logged and dropped.
    pub fn from_posts(posts: Vec<BlogPost>, default_author: &str) -> Self {
        let mut store = Self::new(default_author);
        for post in posts {
            let slug = post.slug.clone();
            if let Err(e) = store.insert(post) {
                tracing::warn!("Dropping post {:?}: {}", slug, e);
            }
        }
        store
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts, newest first
    pub fn list_all(&self) -> Vec<&BlogPost> {
        newest_first(self.posts.values())
    }

    /// Featured posts, newest first
    pub fn list_featured(&self) -> Vec<&BlogPost> {
        newest_first(self.posts.values().filter(|post| post.featured))
    }

    /// Look up a post by slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.slugs.get(slug).and_then(|id| self.posts.get(id))
    }

    /// Look up a post by id
    pub fn get(&self, id: &str) -> Option<&BlogPost> {
        self.posts.get(id)
    }

    /// Posts sharing the category of post `id`, in insertion order.
    ///
    /// Unlike the listings, no recency ordering is applied.
    pub fn get_related(&self, id: &str, limit: usize) -> Vec<&BlogPost> {
        let Some(current) = self.posts.get(id) else {
            return Vec::new();
        };

        self.posts
            .values()
            .filter(|post| post.id != current.id && post.category == current.category)
            .take(limit)
            .collect()
    }

    /// Posts matching `query`, newest first
    pub fn search(&self, query: &BlogQuery) -> Vec<&BlogPost> {
        if query.is_empty() {
            return self.list_all();
        }
        newest_first(self.posts.values().filter(|post| query.matches(post)))
    }

    /// Distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for post in self.posts.values() {
            *counts.entry(post.category.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(name, count)| CategorySummary {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    /// Store a new post under a freshly generated id
    pub fn create(&mut self, mut new_post: NewBlogPost) -> Result<BlogPost, StoreError> {
        new_post.id = None;
        let post = new_post.into_post(&self.default_author)?;
        self.insert(post).cloned()
    }

    fn insert(&mut self, post: BlogPost) -> Result<&BlogPost, StoreError> {
        if self.slugs.contains_key(&post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }
        if self.posts.contains_key(&post.id) {
            return Err(StoreError::DuplicateId(post.id));
        }

        let id = post.id.clone();
        self.slugs.insert(post.slug.clone(), id.clone());
        let (index, _) = self.posts.insert_full(id, post);
        Ok(&self.posts[index])
    }
}

/// Sort by publication date descending; `sort_by` is stable so equal
/// dates keep insertion order.
fn newest_first<'a>(posts: impl Iterator<Item = &'a BlogPost>) -> Vec<&'a BlogPost> {
    let mut posts: Vec<&BlogPost> = posts.collect();
    posts.sort_by(|a, b| b.published_on.cmp(&a.published_on));
    posts
}
