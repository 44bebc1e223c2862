//! Helper functions for presenting posts
//!
//! Text, date, URL and metadata helpers used by the commands. None of them
//! touch the content store's data.

mod date;
mod seo;
mod share;
mod text;
mod toc;
mod url;

pub use date::*;
pub use seo::*;
pub use share::*;
pub use text::*;
pub use toc::*;
pub use url::*;

use crate::config::BlogConfig;
use crate::content::{ContentStore, Post};
use crate::error::ContentError;

/// Helpers bound to a blog configuration
pub struct Helpers {
    config: BlogConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: BlogConfig) -> Self {
        Self { config }
    }

    /// Reading time using the configured words per minute
    pub fn read_time(&self, content: &str) -> u32 {
        calculate_read_time(content, self.config.reading_words_per_minute)
    }

    /// Excerpt using the configured length
    pub fn excerpt(&self, content: &str) -> String {
        generate_excerpt(content, self.config.excerpt_length)
    }

    /// Canonical URL of a post
    pub fn post_url(&self, post: &Post) -> String {
        post_url(&self.config, post)
    }

    /// SEO metadata of a post
    pub fn seo(&self, store: &ContentStore, post: &Post) -> Result<BlogSeo, ContentError> {
        generate_blog_seo(&self.config, store, post)
    }

    /// Share links pointing at a post's canonical URL
    pub fn share_links(&self, post: &Post) -> ShareLinks {
        share_links(&self.post_url(post), &post.title, &post.excerpt)
    }
}
