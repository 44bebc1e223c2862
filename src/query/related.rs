//! Related-post ranking

use chrono::Duration;
use serde::Serialize;
use std::collections::HashSet;

use crate::content::Post;

/// Points for sharing the target's category
pub const SAME_CATEGORY_SCORE: u32 = 10;
/// Points per tag shared with the target
pub const SHARED_TAG_SCORE: u32 = 2;
/// Points for being published close to the target
pub const RECENCY_SCORE: u32 = 1;
/// Publication dates closer than this earn [`RECENCY_SCORE`]
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// A candidate post with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub score: u32,
}

/// Relevance of `candidate` to `target`. Tags compare case-insensitively.
pub fn relevance(target: &Post, candidate: &Post) -> u32 {
    let mut score = 0;

    if candidate.category == target.category {
        score += SAME_CATEGORY_SCORE;
    }

    let target_tags: HashSet<String> = target.tags.iter().map(|t| t.to_lowercase()).collect();
    let candidate_tags: HashSet<String> =
        candidate.tags.iter().map(|t| t.to_lowercase()).collect();
    let shared = candidate_tags.intersection(&target_tags).count() as u32;
    score += shared * SHARED_TAG_SCORE;

    let gap = candidate
        .published_at
        .signed_duration_since(target.published_at);
    let window = Duration::days(RECENCY_WINDOW_DAYS);
    if gap < window && gap > -window {
        score += RECENCY_SCORE;
    }

    score
}

/// Rank every post except `target` by relevance and keep the best
/// `max_results`. Equal scores keep input order.
pub fn related_posts<'a>(
    target: &Post,
    posts: &[&'a Post],
    max_results: usize,
) -> Vec<ScoredPost<'a>> {
    let mut scored: Vec<ScoredPost<'a>> = posts
        .iter()
        .filter(|p| p.id != target.id)
        .map(|&post| ScoredPost {
            post,
            score: relevance(target, post),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_results);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use chrono::{TimeZone, Utc};

    fn post(id: &str, category: &str, tags: &[&str], day: u32) -> Post {
        let date = Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        let mut post = Post::new(id, format!("Post {}", id), category, "aji-team", date);
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    #[test]
    fn test_related_for_esim_guide() {
        let store = ContentStore::demo().unwrap();
        let target = store.post_by_id("1").unwrap();
        let related = related_posts(target, &store.all(), 3);

        let ids: Vec<_> = related.iter().map(|s| s.post.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "2", "3"]);
        // Same category, shared "travel tech" tag, 13 days apart
        assert_eq!(related[0].score, 13);
        assert!(related[1..].iter().all(|s| s.score == 1));
    }

    #[test]
    fn test_target_excluded() {
        let store = ContentStore::demo().unwrap();
        for target in store.posts() {
            let related = related_posts(target, &store.all(), 10);
            assert_eq!(related.len(), 5);
            assert!(related.iter().all(|s| s.post.id != target.id));
        }
    }

    #[test]
    fn test_category_and_tags_outrank_nothing_shared() {
        let target = post("t", "food", &["tagine", "spices", "couscous"], 1);
        let close = post("a", "food", &["Tagine", "spices"], 28);
        let far = post("b", "culture", &["music"], 2);

        assert_eq!(relevance(&target, &close), 10 + 4 + 1);
        assert_eq!(relevance(&target, &far), 1);
        let ranked = related_posts(&target, &[&far, &close], 3);
        assert_eq!(ranked[0].post.id, "a");
    }

    #[test]
    fn test_repeated_tags_count_once() {
        let target = post("t", "food", &["tea", "mint"], 1);
        let repeated = post("a", "culture", &["tea", "Tea", "TEA"], 31);
        assert_eq!(relevance(&target, &repeated), SHARED_TAG_SCORE);
    }

    #[test]
    fn test_recency_window_edges() {
        let target = post("t", "food", &[], 1);
        let inside = post("a", "culture", &[], 30);
        let outside = post("b", "culture", &[], 31);
        assert_eq!(relevance(&target, &inside), 1);
        assert_eq!(relevance(&target, &outside), 0);
        assert_eq!(relevance(&inside, &target), 1);
    }

    #[test]
    fn test_ties_keep_input_order_and_short_lists() {
        let target = post("t", "food", &[], 1);
        let a = post("a", "culture", &[], 2);
        let b = post("b", "culture", &[], 3);
        let ranked = related_posts(&target, &[&b, &a, &target], 5);
        let ids: Vec<_> = ranked.iter().map(|s| s.post.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        assert!(related_posts(&target, &[&target], 3).is_empty());
        assert!(related_posts(&target, &[&a], 0).is_empty());
    }
}
