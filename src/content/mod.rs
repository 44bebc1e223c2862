//! Content module - posts, lookup tables, loading and validation

mod demo;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod store;
pub mod validate;

pub use frontmatter::FrontMatter;
pub use loader::{ContentTables, SiteLoader};
pub use markdown::MarkdownRenderer;
pub use post::{Author, Category, Post};
pub use store::ContentStore;
