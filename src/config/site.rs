//! Blog configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::query::QueryParams;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,
    pub language: String,

    // Pagination
    pub posts_per_page: usize,
    pub posts_per_page_search: usize,
    pub posts_per_page_category: usize,

    // Writing
    pub excerpt_length: usize,
    pub reading_words_per_minute: usize,

    // Directory
    pub source_dir: String,
    pub data_dir: String,
    pub posts_dir: String,

    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub related: RelatedConfig,
    #[serde(default)]
    pub seo: SeoConfig,
    #[serde(default)]
    pub categories: IndexMap<String, CategorySettings>,
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "AJI Blog".to_string(),
            description: "Your ultimate guide to Morocco travel, culture, and experiences"
                .to_string(),
            url: "https://www.ajiapp.com/blog".to_string(),
            language: "en".to_string(),

            posts_per_page: 9,
            posts_per_page_search: 12,
            posts_per_page_category: 9,

            excerpt_length: 160,
            reading_words_per_minute: 200,

            source_dir: "source".to_string(),
            data_dir: "_data".to_string(),
            posts_dir: "_posts".to_string(),

            search: SearchConfig::default(),
            related: RelatedConfig::default(),
            seo: SeoConfig::default(),
            categories: IndexMap::new(),
            validation: ValidationRules::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: BlogConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        if config.i18n.enabled {
            tracing::debug!("i18n is enabled in config but not applied");
        }
        Ok(config)
    }

    /// Page size for a listing: search results and category pages have
    /// their own sizes, everything else uses `posts_per_page`.
    pub fn page_size_for(&self, params: &QueryParams) -> usize {
        let term = params.search.trim();
        if !term.is_empty() && term.chars().count() >= self.search.min_length {
            self.posts_per_page_search
        } else if params.category.is_some() {
            self.posts_per_page_category
        } else {
            self.posts_per_page
        }
    }

    /// Settings for a category, if configured
    pub fn category_settings(&self, id: &str) -> Option<&CategorySettings> {
        self.categories.get(id)
    }
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_length: usize,
    /// Quiet period callers should wait before re-running a search
    pub debounce_ms: u64,
    pub highlight: bool,
    pub fields: Vec<String>,
    /// Recorded for completeness; search does not rank
    pub weights: IndexMap<String, u32>,
    pub fuzzy: bool,
    pub stemming: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let fields = ["title", "excerpt", "content", "tags", "author.name", "category.name"];
        let weights = [
            ("title", 3),
            ("excerpt", 2),
            ("tags", 2),
            ("content", 1),
            ("author.name", 1),
            ("category.name", 1),
        ];
        Self {
            min_length: 2,
            debounce_ms: 300,
            highlight: true,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            weights: weights.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            fuzzy: false,
            stemming: false,
        }
    }
}

/// Related posts configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    pub enabled: bool,
    pub max_results: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_results: 3,
        }
    }
}

/// SEO configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub title_separator: String,
    pub title_suffix: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub twitter_handle: String,
    pub publisher: String,
    pub logo: String,
    pub open_graph_locale: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title_separator: " - ".to_string(),
            title_suffix: "AJI Blog | Your Guide to Morocco".to_string(),
            meta_description: "Discover Morocco through expert travel guides, cultural insights, and practical tips.".to_string(),
            keywords: vec![
                "Morocco".to_string(),
                "travel".to_string(),
                "guide".to_string(),
                "AJI".to_string(),
            ],
            author: "AJI Team".to_string(),
            twitter_handle: "@ajiapp".to_string(),
            publisher: "AJI App".to_string(),
            logo: "/logo.png".to_string(),
            open_graph_locale: "en_US".to_string(),
        }
    }
}

/// Display settings for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySettings {
    pub icon: String,
    pub meta_keywords: Vec<String>,
    pub featured: bool,
    pub sort_order: u32,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            icon: String::new(),
            meta_keywords: Vec::new(),
            featured: true,
            sort_order: 0,
        }
    }
}

/// Length bounds for a text field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthRule {
    pub min_length: usize,
    pub max_length: Option<usize>,
}

impl Default for LengthRule {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: None,
        }
    }
}

/// Content validation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub title: LengthRule,
    pub excerpt: LengthRule,
    pub content: LengthRule,
    pub min_tags: usize,
    pub max_tags: usize,
    pub max_tag_length: usize,
    pub max_slug_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            title: LengthRule {
                min_length: 10,
                max_length: Some(100),
            },
            excerpt: LengthRule {
                min_length: 50,
                max_length: Some(200),
            },
            content: LengthRule {
                min_length: 500,
                max_length: None,
            },
            min_tags: 1,
            max_tags: 10,
            max_tag_length: 30,
            max_slug_length: 100,
        }
    }
}

/// Multilingual settings. Parsed, never applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub enabled: bool,
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            default_locale: "en".to_string(),
            locales: vec!["en".to_string(), "fr".to_string(), "ar".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.title, "AJI Blog");
        assert_eq!(config.posts_per_page, 9);
        assert_eq!(config.search.min_length, 2);
        assert!(!config.search.fuzzy);
        assert!(!config.i18n.enabled);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Test Blog
posts_per_page: 4
search:
  min_length: 3
categories:
  food:
    icon: "fork"
    featured: true
    sort_order: 4
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Test Blog");
        assert_eq!(config.posts_per_page, 4);
        assert_eq!(config.search.min_length, 3);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.posts_per_page_search, 12);
        let food = config.category_settings("food").unwrap();
        assert!(food.featured);
        assert_eq!(food.sort_order, 4);
    }

    #[test]
    fn test_page_size_for() {
        let config = BlogConfig {
            posts_per_page: 9,
            posts_per_page_search: 12,
            posts_per_page_category: 6,
            ..Default::default()
        };

        assert_eq!(config.page_size_for(&QueryParams::default()), 9);

        let search = QueryParams {
            search: "atlas".to_string(),
            ..Default::default()
        };
        assert_eq!(config.page_size_for(&search), 12);

        let category = QueryParams {
            category: Some("food".to_string()),
            ..Default::default()
        };
        assert_eq!(config.page_size_for(&category), 6);

        // A one-letter term does not count as a search
        let short = QueryParams {
            search: "a".to_string(),
            ..Default::default()
        };
        assert_eq!(config.page_size_for(&short), 9);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        std::fs::write(&path, "title: From Disk\nurl: https://example.com/blog\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.title, "From Disk");
        assert_eq!(config.url, "https://example.com/blog");
        assert_eq!(config.excerpt_length, 160);
    }
}
