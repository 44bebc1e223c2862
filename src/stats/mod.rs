//! Blog statistics and category summaries

use serde::Serialize;

use crate::config::BlogConfig;
use crate::content::{Category, ContentStore, Post};
use crate::query::{sort, SortKey};

/// How many posts the popular list holds
pub const POPULAR_POSTS: usize = 5;

/// A category with its post count and configured display settings
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub post_count: usize,
    pub icon: String,
    /// Categories are featured unless configured otherwise
    pub featured: bool,
    pub sort_order: u32,
}

/// Categories in configured sort order; unconfigured ones keep store order
/// after the configured ones.
pub fn category_summaries<'a>(
    store: &'a ContentStore,
    config: &BlogConfig,
) -> Vec<CategorySummary<'a>> {
    let mut summaries: Vec<CategorySummary<'a>> = store
        .categories()
        .map(|category| {
            let settings = config.category_settings(&category.id);
            CategorySummary {
                category,
                post_count: store.posts_in_category(&category.id).len(),
                icon: settings.map(|s| s.icon.clone()).unwrap_or_default(),
                featured: settings.map_or(true, |s| s.featured),
                sort_order: settings.map_or(u32::MAX, |s| s.sort_order),
            }
        })
        .collect();

    summaries.sort_by_key(|s| s.sort_order);
    summaries
}

/// Aggregate numbers for the blog
#[derive(Debug, Clone, Serialize)]
pub struct BlogStats<'a> {
    pub total_posts: usize,
    pub total_views: u64,
    pub total_likes: u64,
    /// Mean read time in minutes, rounded
    pub average_read_time: u32,
    pub featured_posts: usize,
    pub categories: Vec<CategorySummary<'a>>,
    pub popular_posts: Vec<&'a Post>,
}

pub fn blog_stats<'a>(store: &'a ContentStore, config: &BlogConfig) -> BlogStats<'a> {
    let posts = store.posts();
    let total_posts = posts.len();
    let total_views = posts.iter().fold(0u64, |sum, p| sum.saturating_add(p.views));
    let total_likes = posts.iter().fold(0u64, |sum, p| sum.saturating_add(p.likes));

    let average_read_time = if total_posts == 0 {
        0
    } else {
        let total: u64 = posts.iter().map(|p| u64::from(p.read_time)).sum();
        (total as f64 / total_posts as f64).round() as u32
    };

    let mut popular_posts = sort(&store.all(), SortKey::Popularity);
    popular_posts.truncate(POPULAR_POSTS);

    BlogStats {
        total_posts,
        total_views,
        total_likes,
        average_read_time,
        featured_posts: store.featured_posts().len(),
        categories: category_summaries(store, config),
        popular_posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategorySettings;

    #[test]
    fn test_blog_stats() {
        let store = ContentStore::demo().unwrap();
        let stats = blog_stats(&store, &BlogConfig::default());

        assert_eq!(stats.total_posts, 6);
        assert_eq!(stats.total_views, 11603);
        assert_eq!(stats.total_likes, 453);
        // (6 + 8 + 7 + 9 + 10 + 5) / 6 = 7.5
        assert_eq!(stats.average_read_time, 8);
        assert_eq!(stats.featured_posts, 3);

        let popular: Vec<_> = stats.popular_posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(popular, vec!["4", "1", "2", "6", "3"]);
    }

    #[test]
    fn test_category_summaries_default_order() {
        let store = ContentStore::demo().unwrap();
        let summaries = category_summaries(&store, &BlogConfig::default());
        let counts: Vec<_> = summaries
            .iter()
            .map(|s| (s.category.id.as_str(), s.post_count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("travel-tips", 1),
                ("culture", 1),
                ("destinations", 1),
                ("food", 1),
                ("technology", 2),
            ]
        );
        assert!(summaries.iter().all(|s| s.featured));
    }

    #[test]
    fn test_category_summaries_configured() {
        let store = ContentStore::demo().unwrap();
        let mut config = BlogConfig::default();
        config.categories.insert(
            "technology".to_string(),
            CategorySettings {
                icon: "phone".to_string(),
                featured: false,
                sort_order: 1,
                ..Default::default()
            },
        );
        config.categories.insert(
            "food".to_string(),
            CategorySettings {
                featured: true,
                sort_order: 2,
                ..Default::default()
            },
        );

        let summaries = category_summaries(&store, &config);
        assert_eq!(summaries[0].category.id, "technology");
        assert_eq!(summaries[0].icon, "phone");
        assert!(!summaries[0].featured);
        assert_eq!(summaries[1].category.id, "food");
        assert_eq!(summaries[2].category.id, "travel-tips");
    }

    #[test]
    fn test_totals_saturate() {
        use crate::content::{Author, Category, Post};
        use chrono::{TimeZone, Utc};

        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut first = Post::new("1", "First", "food", "a", date);
        let mut second = Post::new("2", "Second", "food", "a", date);
        first.views = u64::MAX;
        second.views = 10;
        first.likes = u64::MAX - 1;
        second.likes = 5;

        let store = ContentStore::new(
            vec![Category::new("food", "Food", "", "")],
            vec![Author::new("a", "A", "", "")],
            vec![first, second],
        )
        .unwrap();
        let stats = blog_stats(&store, &BlogConfig::default());
        assert_eq!(stats.total_views, u64::MAX);
        assert_eq!(stats.total_likes, u64::MAX);
    }

    #[test]
    fn test_empty_store_stats() {
        let store = ContentStore::new(vec![], vec![], vec![]).unwrap();
        let stats = blog_stats(&store, &BlogConfig::default());
        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.average_read_time, 0);
        assert!(stats.popular_posts.is_empty());
    }
}
