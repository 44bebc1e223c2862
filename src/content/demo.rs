//! Built-in sample content

use anyhow::Result;

use super::{ContentStore, ContentTables};

const DEMO_CONTENT: &str = include_str!("demo.yml");

impl ContentStore {
    /// The sample blog: five categories, three authors and six posts
    pub fn demo() -> Result<Self> {
        ContentTables::from_yaml(DEMO_CONTENT)?.into_store()
    }
}
