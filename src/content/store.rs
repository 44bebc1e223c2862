//! Immutable content store
//!
//! Holds the category and author lookup tables plus the post list. All
//! references are checked once at construction, so lookups afterwards only
//! miss when handed a post that did not come from this store.

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

use super::post::{Author, Category, Post};
use crate::error::ContentError;

/// Posts with their category and author tables
#[derive(Debug, Clone)]
pub struct ContentStore {
    categories: IndexMap<String, Category>,
    authors: IndexMap<String, Author>,
    posts: Vec<Post>,
}

impl ContentStore {
    /// Build a store, rejecting dangling references and duplicate keys
    pub fn new(
        categories: Vec<Category>,
        authors: Vec<Author>,
        posts: Vec<Post>,
    ) -> Result<Self, ContentError> {
        let mut category_table = IndexMap::with_capacity(categories.len());
        for category in categories {
            if category_table.contains_key(&category.id) {
                return Err(ContentError::DuplicateCategory(category.id));
            }
            category_table.insert(category.id.clone(), category);
        }

        let mut author_table = IndexMap::with_capacity(authors.len());
        for author in authors {
            if author_table.contains_key(&author.id) {
                return Err(ContentError::DuplicateAuthor(author.id));
            }
            author_table.insert(author.id.clone(), author);
        }

        let mut ids: HashSet<&str> = HashSet::new();
        let mut slugs: HashMap<&str, &str> = HashMap::new();
        for post in &posts {
            if !ids.insert(post.id.as_str()) {
                return Err(ContentError::DuplicatePostId(post.id.clone()));
            }
            if let Some(first) = slugs.insert(post.slug.as_str(), post.id.as_str()) {
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.to_string(),
                    second: post.id.clone(),
                });
            }
            if !category_table.contains_key(&post.category) {
                return Err(ContentError::UnknownCategory {
                    post: post.id.clone(),
                    category: post.category.clone(),
                });
            }
            if !author_table.contains_key(&post.author) {
                return Err(ContentError::UnknownAuthor {
                    post: post.id.clone(),
                    author: post.author.clone(),
                });
            }
        }

        tracing::debug!(
            "Content store ready: {} posts, {} categories, {} authors",
            posts.len(),
            category_table.len(),
            author_table.len()
        );

        Ok(Self {
            categories: category_table,
            authors: author_table,
            posts,
        })
    }

    /// All posts in source order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All posts as references, ready for the query functions
    pub fn all(&self) -> Vec<&Post> {
        self.posts.iter().collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.get(id)
    }

    /// Resolve a post's category, failing on a dangling reference
    pub fn category_of(&self, post: &Post) -> Result<&Category, ContentError> {
        self.categories
            .get(&post.category)
            .ok_or_else(|| ContentError::UnknownCategory {
                post: post.id.clone(),
                category: post.category.clone(),
            })
    }

    /// Resolve a post's author, failing on a dangling reference
    pub fn author_of(&self, post: &Post) -> Result<&Author, ContentError> {
        self.authors
            .get(&post.author)
            .ok_or_else(|| ContentError::UnknownAuthor {
                post: post.id.clone(),
                author: post.author.clone(),
            })
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts in one category, in source order
    pub fn posts_in_category(&self, category_id: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.category == category_id)
            .collect()
    }

    pub fn featured_posts(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    /// Most recent posts first, without reordering the store
    pub fn recent_posts(&self, limit: usize) -> Vec<&Post> {
        let mut posts = self.all();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(limit);
        posts
    }

    /// Every distinct tag with its post count, most used first.
    /// Tags differing only in case are counted together under the first
    /// spelling seen.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: IndexMap<String, (String, usize)> = IndexMap::new();
        for post in &self.posts {
            for tag in &post.tags {
                let entry = counts
                    .entry(tag.to_lowercase())
                    .or_insert_with(|| (tag.clone(), 0));
                entry.1 += 1;
            }
        }
        let mut tags: Vec<_> = counts.into_values().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1));
        tags
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
