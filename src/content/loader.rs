//! Content loader - reads data tables and Markdown posts from a site directory

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Author, Category, ContentStore, FrontMatter, MarkdownRenderer, Post};
use crate::config::BlogConfig;
use crate::helpers::{calculate_read_time, generate_excerpt};

/// Categories, authors and posts as they appear in a YAML data file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentTables {
    pub categories: Vec<Category>,
    pub authors: Vec<Author>,
    pub posts: Vec<Post>,
}

impl ContentTables {
    /// Parse tables from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate references and build the store
    pub fn into_store(self) -> Result<ContentStore> {
        Ok(ContentStore::new(self.categories, self.authors, self.posts)?)
    }
}

/// Loads a site directory:
///
/// ```text
/// source/_data/categories.yml
/// source/_data/authors.yml
/// source/_data/posts.yml     (optional)
/// source/_posts/**/*.md
/// ```
pub struct SiteLoader<'a> {
    config: &'a BlogConfig,
    source_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl<'a> SiteLoader<'a> {
    pub fn new(config: &'a BlogConfig, base_dir: &Path) -> Self {
        Self {
            config,
            source_dir: base_dir.join(&config.source_dir),
            renderer: MarkdownRenderer::new(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.source_dir.join(&self.config.data_dir)
    }

    fn posts_dir(&self) -> PathBuf {
        self.source_dir.join(&self.config.posts_dir)
    }

    /// Load everything and build a validated store
    pub fn load(&self) -> Result<ContentStore> {
        let data_dir = self.data_dir();
        let categories: Vec<Category> = read_table(&data_dir.join("categories.yml"))?;
        let authors: Vec<Author> = read_table(&data_dir.join("authors.yml"))?;

        let posts_table = data_dir.join("posts.yml");
        let mut posts: Vec<Post> = if posts_table.exists() {
            read_table(&posts_table)?
        } else {
            Vec::new()
        };
        posts.extend(self.load_posts()?);

        tracing::info!(
            "Loaded {} posts, {} categories, {} authors from {:?}",
            posts.len(),
            categories.len(),
            authors.len(),
            self.source_dir
        );

        ContentTables {
            categories,
            authors,
            posts,
        }
        .into_store()
    }

    /// Load all Markdown posts. Files that fail to parse are skipped.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.posts_dir();
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file. Unpublished posts yield `None`.
    fn load_post(&self, path: &Path) -> Result<Option<Post>> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        if !fm.published {
            return Ok(None);
        }

        let published_at = fm
            .parse_date()
            .with_context(|| format!("missing or invalid date in {:?}", path))?;
        let category = fm.category.clone().context("missing category")?;
        let author = fm.author.clone().context("missing author")?;

        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let content = self.renderer.render(body);
        let slug = fm.slug.clone().unwrap_or_else(|| slug::slugify(&title));
        let id = fm.id.clone().unwrap_or_else(|| slug.clone());

        let mut post = Post::new(id, title, category, author, published_at);
        post.slug = slug;
        post.excerpt = fm
            .excerpt
            .clone()
            .unwrap_or_else(|| generate_excerpt(&content, self.config.excerpt_length));
        post.read_time = fm.read_time.unwrap_or_else(|| {
            calculate_read_time(&content, self.config.reading_words_per_minute)
        });
        post.image = fm.image.clone().unwrap_or_default();
        post.tags = fm.tags;
        post.featured = fm.featured;
        post.views = fm.views;
        post.likes = fm.likes;
        post.content = content;

        Ok(Some(post))
    }
}

/// Read a YAML list from a data file
fn read_table<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
