//! aji-blog: content store and query engine for the AJI travel blog
//!
//! Posts, categories and authors live in an immutable [`content::ContentStore`].
//! The [`query`] module searches, filters, sorts, paginates and ranks related
//! posts over it without ever changing it.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod interactions;
pub mod query;
pub mod stats;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A loaded blog
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// All content
    pub store: content::ContentStore,
}

impl Blog {
    /// Load a blog from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = Self::load_config(&base_dir)?;
        let store = content::SiteLoader::new(&config, &base_dir).load()?;

        Ok(Self {
            config,
            base_dir,
            store,
        })
    }

    /// Use the built-in sample content. The configuration still comes from
    /// `base_dir` when it has a `_config.yml`.
    pub fn demo<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = Self::load_config(&base_dir)?;

        Ok(Self {
            config,
            base_dir,
            store: content::ContentStore::demo()?,
        })
    }

    fn load_config(base_dir: &Path) -> Result<config::BlogConfig> {
        let config_path = base_dir.join("_config.yml");
        if config_path.exists() {
            config::BlogConfig::load(&config_path)
        } else {
            Ok(config::BlogConfig::default())
        }
    }

    /// A query engine over this blog's content
    pub fn engine(&self) -> query::QueryEngine<'_> {
        query::QueryEngine::new(&self.store, &self.config)
    }

    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}
