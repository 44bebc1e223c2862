//! Substring search over posts

use crate::content::{ContentStore, Post};
use crate::error::ContentError;

/// Terms shorter than this leave the input unfiltered
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Case-insensitive substring search with the default minimum length
pub fn search<'a>(
    store: &ContentStore,
    posts: &[&'a Post],
    term: &str,
) -> Result<Vec<&'a Post>, ContentError> {
    search_with_min(store, posts, term, MIN_SEARCH_LENGTH)
}

/// Keep posts whose title, excerpt, content, any tag, author name or
/// category name contains `term`, ignoring case. Order is preserved.
///
/// The term is trimmed first; an empty or too-short term returns the input
/// unchanged.
pub fn search_with_min<'a>(
    store: &ContentStore,
    posts: &[&'a Post],
    term: &str,
    min_length: usize,
) -> Result<Vec<&'a Post>, ContentError> {
    let term = term.trim();
    if term.is_empty() || term.chars().count() < min_length {
        return Ok(posts.to_vec());
    }

    let needle = term.to_lowercase();
    let mut matches = Vec::new();
    for &post in posts {
        if post_matches(store, post, &needle)? {
            matches.push(post);
        }
    }

    tracing::debug!(
        "Search {:?} matched {} of {} posts",
        term,
        matches.len(),
        posts.len()
    );
    Ok(matches)
}

/// `needle` must already be lowercase
fn post_matches(store: &ContentStore, post: &Post, needle: &str) -> Result<bool, ContentError> {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    // References are resolved up front so a broken post fails even when an
    // earlier field would have matched.
    let author = store.author_of(post)?;
    let category = store.category_of(post)?;

    Ok(contains(&post.title)
        || contains(&post.excerpt)
        || contains(&post.content)
        || post.tags.iter().any(|tag| contains(tag))
        || contains(&author.name)
        || contains(&category.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_short_term_is_identity() {
        let store = ContentStore::demo().unwrap();
        let all = store.all();
        for term in ["", " ", "e", "  a  "] {
            let result = search(&store, &all, term).unwrap();
            assert_eq!(ids(&result), ids(&all), "term {:?}", term);
        }
    }

    #[test]
    fn test_search_esim() {
        let store = ContentStore::demo().unwrap();
        let result = search(&store, &store.all(), "esim").unwrap();
        // The eSIM guide, plus the apps post whose body mentions eSIM purchase
        assert_eq!(ids(&result), vec!["1", "6"]);
        assert_eq!(result[0].slug, "complete-guide-esim-morocco");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = ContentStore::demo().unwrap();
        let lower = search(&store, &store.all(), "berber").unwrap();
        let upper = search(&store, &store.all(), "BERBER").unwrap();
        assert_eq!(ids(&lower), vec!["2", "5"]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn test_search_author_and_category_names() {
        let store = ContentStore::demo().unwrap();
        let by_author = search(&store, &store.all(), "Sarah").unwrap();
        assert_eq!(ids(&by_author), vec!["3", "5"]);

        let by_category = search(&store, &store.all(), "travel tech").unwrap();
        assert_eq!(ids(&by_category), vec!["1", "6"]);
    }

    #[test]
    fn test_search_preserves_input_order() {
        let store = ContentStore::demo().unwrap();
        let mut reversed = store.all();
        reversed.reverse();
        let result = search(&store, &reversed, "atlas").unwrap();
        assert_eq!(ids(&result), vec!["5", "2", "1"]);
    }

    #[test]
    fn test_search_partition_property() {
        let store = ContentStore::demo().unwrap();
        let all = store.all();
        for term in ["morocco", "tea", "culture", "zz-nothing"] {
            let result = search(&store, &all, term).unwrap();
            for post in &all {
                let author = store.author_of(post).unwrap();
                let category = store.category_of(post).unwrap();
                let hit = [&post.title, &post.excerpt, &post.content, &author.name, &category.name]
                    .iter()
                    .any(|f| f.to_lowercase().contains(term))
                    || post.tags.iter().any(|t| t.to_lowercase().contains(term));
                let included = result.iter().any(|p| p.id == post.id);
                assert_eq!(hit, included, "term {:?} post {}", term, post.id);
            }
        }
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let store = ContentStore::demo().unwrap();
        let result = search(&store, &store.all(), "snowboarding").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_dangling_reference_fails() {
        let store = ContentStore::demo().unwrap();
        let mut orphan = store.post_by_id("1").unwrap().clone();
        orphan.category = "gone".to_string();
        let posts = vec![&orphan];

        let err = search(&store, &posts, "esim").unwrap_err();
        assert!(matches!(err, ContentError::UnknownCategory { .. }));
    }

    #[test]
    fn test_custom_min_length() {
        let store = ContentStore::demo().unwrap();
        let all = store.all();
        assert_eq!(search_with_min(&store, &all, "tea", 4).unwrap().len(), 6);
        assert!(search_with_min(&store, &all, "tea", 3).unwrap().len() < 6);
    }
}
