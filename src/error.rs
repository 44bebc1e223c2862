//! Content errors
//!
//! These indicate broken source data and are raised as soon as they are
//! found. "No results" conditions are never errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("post {post} references unknown category {category:?}")]
    UnknownCategory { post: String, category: String },

    #[error("post {post} references unknown author {author:?}")]
    UnknownAuthor { post: String, author: String },

    #[error("duplicate post id {0:?}")]
    DuplicatePostId(String),

    #[error("duplicate slug {slug:?} on posts {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("duplicate category id {0:?}")]
    DuplicateCategory(String),

    #[error("duplicate author id {0:?}")]
    DuplicateAuthor(String),
}
