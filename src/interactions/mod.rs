//! Like tracking
//!
//! Likes are kept in a small JSON ledger next to the site, separate from the
//! content store. Counts shown to readers are the stored count plus one when
//! the post is in the ledger; the store itself is never changed.

use anyhow::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Post;

/// Directory holding local interaction state
pub const STATE_DIR: &str = ".aji-blog";

/// Ledger file name
const LEDGER_FILE: &str = ".aji-blog/likes.json";

/// Post ids the local reader has liked
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LikeLedger {
    /// Version of the ledger format
    pub version: u32,
    /// Liked post ids, in the order they were liked
    pub liked: IndexSet<String>,
}

impl LikeLedger {
    /// Current ledger format version
    const VERSION: u32 = 1;

    /// Create an empty ledger with version set
    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            ..Default::default()
        }
    }

    /// Load the ledger from disk, or start a new empty one
    pub fn load(base_dir: &Path) -> Self {
        let path = base_dir.join(LEDGER_FILE);
        if let Ok(content) = fs::read_to_string(&path) {
            match serde_json::from_str::<LikeLedger>(&content) {
                Ok(ledger) if ledger.version == Self::VERSION => return ledger,
                Ok(_) => tracing::info!("Like ledger version mismatch, starting fresh"),
                Err(e) => tracing::warn!("Ignoring unreadable like ledger {:?}: {}", path, e),
            }
        }
        Self::new()
    }

    /// Save the ledger to disk
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir.join(STATE_DIR))?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(base_dir.join(LEDGER_FILE), content)?;
        Ok(())
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    /// Flip the like state of a post and return the new state
    pub fn toggle(&mut self, post_id: &str) -> bool {
        if self.liked.shift_remove(post_id) {
            tracing::debug!("Unliked post {}", post_id);
            false
        } else {
            self.liked.insert(post_id.to_string());
            tracing::debug!("Liked post {}", post_id);
            true
        }
    }

    /// Like count to display for a post
    pub fn like_count(&self, post: &Post) -> u64 {
        post.likes.saturating_add(u64::from(self.is_liked(&post.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_toggle_like() {
        let store = ContentStore::demo().unwrap();
        let post = store.post_by_id("4").unwrap();
        let mut ledger = LikeLedger::new();

        assert_eq!(ledger.like_count(post), 128);
        assert!(ledger.toggle("4"));
        assert_eq!(ledger.like_count(post), 129);
        assert!(!ledger.toggle("4"));
        assert_eq!(ledger.like_count(post), 128);
        // The store is untouched either way
        assert_eq!(store.post_by_id("4").unwrap().likes, 128);
    }

    #[test]
    fn test_like_count_saturates() {
        let store = ContentStore::demo().unwrap();
        let mut post = store.post_by_id("1").unwrap().clone();
        post.likes = u64::MAX;
        let mut ledger = LikeLedger::new();
        assert!(ledger.toggle(&post.id));
        assert_eq!(ledger.like_count(&post), u64::MAX);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = LikeLedger::new();
        ledger.toggle("2");
        ledger.toggle("5");
        ledger.save(dir.path()).unwrap();

        let loaded = LikeLedger::load(dir.path());
        assert!(loaded.is_liked("2"));
        assert!(loaded.is_liked("5"));
        assert!(!loaded.is_liked("1"));
        assert_eq!(loaded.liked.iter().collect::<Vec<_>>(), vec!["2", "5"]);
    }

    #[test]
    fn test_load_missing_or_stale() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LikeLedger::load(dir.path()).liked.is_empty());

        fs::create_dir_all(dir.path().join(STATE_DIR)).unwrap();
        fs::write(
            dir.path().join(LEDGER_FILE),
            r#"{"version": 0, "liked": ["3"]}"#,
        )
        .unwrap();
        let ledger = LikeLedger::load(dir.path());
        assert_eq!(ledger.version, 1);
        assert!(ledger.liked.is_empty());
    }
}
