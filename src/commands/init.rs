//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::ContentStore;

const CONFIG_TEMPLATE: &str = r#"# AJI Blog configuration

# Site
title: AJI Blog
description: Travel guides, culture and tips for exploring Morocco
url: https://www.ajiapp.com/blog
language: en

# Directory
source_dir: source
data_dir: _data
posts_dir: _posts

# Pagination
posts_per_page: 9
posts_per_page_search: 12
posts_per_page_category: 9

# Writing
excerpt_length: 160
reading_words_per_minute: 200

search:
  min_length: 2
  debounce_ms: 300

related:
  enabled: true
  max_results: 3
"#;

const SAMPLE_POST: &str = r#"---
title: Welcome to the AJI Blog
date: {{ date }}
category: travel-tips
author: aji-team
tags:
  - Morocco
  - Getting Started
---

This is your first post. Posts live in `source/_posts` and are written in
Markdown with a YAML front-matter block.

## Writing posts

Every post needs a `title`, a `date`, a `category` and an `author`. The
category and author must match an `id` in `source/_data/categories.yml` and
`source/_data/authors.yml`.

## Checking your content

Run `aji-blog validate` to check posts against the authoring rules and
`aji-blog list posts` to see what was loaded.
"#;

/// Initialize a new site in the given directory. The category and author
/// tables start from the built-in sample content.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let data_dir = target_dir.join("source/_data");
    let posts_dir = target_dir.join("source/_posts");
    fs::create_dir_all(&data_dir)?;
    fs::create_dir_all(&posts_dir)?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let demo = ContentStore::demo()?;
    let categories: Vec<_> = demo.categories().collect();
    let authors: Vec<_> = demo.authors().collect();
    fs::write(data_dir.join("categories.yml"), serde_yaml::to_string(&categories)?)?;
    fs::write(data_dir.join("authors.yml"), serde_yaml::to_string(&authors)?)?;

    let now = chrono::Utc::now();
    let sample_post =
        SAMPLE_POST.replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string());
    fs::write(posts_dir.join("welcome.md"), sample_post)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;

    #[test]
    fn test_init_site_loads() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.store.len(), 1);
        assert_eq!(blog.store.categories().count(), 5);
        assert_eq!(blog.store.authors().count(), 3);

        let post = blog.store.post_by_slug("welcome-to-the-aji-blog").unwrap();
        assert_eq!(post.category, "travel-tips");
        assert_eq!(blog.store.author_of(post).unwrap().name, "AJI Team");
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
