//! Post, Category and Author models

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A blog post
///
/// Category and author are stored as ids and resolved through the
/// [`ContentStore`](super::ContentStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// URL-safe unique name
    pub slug: String,

    /// Short summary shown on cards
    #[serde(default)]
    pub excerpt: String,

    /// Rendered HTML content
    #[serde(default)]
    pub content: String,

    /// Featured image reference
    #[serde(default)]
    pub image: String,

    /// Category id
    pub category: String,

    /// Author id
    pub author: String,

    /// Publication date
    pub published_at: DateTime<Utc>,

    /// Estimated reading time in minutes
    #[serde(default = "default_read_time")]
    pub read_time: u32,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the post is highlighted on the blog home
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
}

fn default_read_time() -> u32 {
    1
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        author: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        let slug = slug::slugify(&title);
        Self {
            id: id.into(),
            title,
            slug,
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            category: category.into(),
            author: author.into(),
            published_at,
            read_time: 1,
            tags: Vec::new(),
            featured: false,
            views: 0,
            likes: 0,
        }
    }

    /// Views plus likes, the key for popularity ordering
    pub fn popularity(&self) -> u64 {
        self.views.saturating_add(self.likes)
    }

    /// Whether the post carries a tag, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// A topical grouping of posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display color token
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, description: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        }
    }
}

/// A post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    /// Platform name to handle
    #[serde(default)]
    pub social: IndexMap<String, String>,
}

impl Author {
    pub fn new(id: &str, name: &str, bio: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            bio: bio.to_string(),
            avatar: avatar.to_string(),
            social: IndexMap::new(),
        }
    }

    /// Add a social handle
    pub fn with_social(mut self, platform: &str, handle: &str) -> Self {
        self.social.insert(platform.to_string(), handle.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_post_slug() {
        let date = Utc.with_ymd_and_hms(2025, 1, 25, 10, 0, 0).unwrap();
        let post = Post::new("1", "Hidden Gems of the Atlas", "destinations", "aji-team", date);
        assert_eq!(post.slug, "hidden-gems-of-the-atlas");
        assert_eq!(post.popularity(), 0);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let date = Utc.with_ymd_and_hms(2025, 1, 25, 10, 0, 0).unwrap();
        let mut post = Post::new("1", "Title", "technology", "aji-team", date);
        post.tags = vec!["eSIM".to_string(), "Travel Tech".to_string()];
        assert!(post.has_tag("esim"));
        assert!(post.has_tag("travel tech"));
        assert!(!post.has_tag("travel"));
    }

    #[test]
    fn test_author_social_keys_unique() {
        let author = Author::new("a", "A", "", "")
            .with_social("twitter", "old")
            .with_social("twitter", "new");
        assert_eq!(author.social.len(), 1);
        assert_eq!(author.social["twitter"], "new");
    }
}
