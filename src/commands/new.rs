//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Write a new Markdown post into the posts directory and return its path.
/// The category and author must already exist.
pub fn create_post(
    blog: &Blog,
    title: &str,
    category: &str,
    author: &str,
    tags: &[String],
) -> Result<PathBuf> {
    if blog.store.category(category).is_none() {
        anyhow::bail!("Unknown category: {}", category);
    }
    if blog.store.author(author).is_none() {
        anyhow::bail!("Unknown author: {}", author);
    }

    let slug = slug::slugify(title);
    if blog.store.post_by_slug(&slug).is_some() {
        anyhow::bail!("A post with slug {:?} already exists", slug);
    }

    let target_dir = blog
        .base_dir
        .join(&blog.config.source_dir)
        .join(&blog.config.posts_dir);
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Utc::now();
    let mut content = format!(
        "---\ntitle: {}\ndate: {}\ncategory: {}\nauthor: {}\n",
        serde_json::to_string(title)?,
        now.format("%Y-%m-%d %H:%M:%S"),
        category,
        author
    );
    if tags.is_empty() {
        content.push_str("tags:\n");
    } else {
        content.push_str(&format!("tags: {}\n", serde_json::to_string(tags)?));
    }
    content.push_str("---\n");

    fs::write(&file_path, content)?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}
