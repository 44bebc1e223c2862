//! Category filter

use crate::content::Post;

/// Keep posts in `category`. `None` or an empty id keeps everything; an
/// unknown id yields nothing.
pub fn filter_by_category<'a>(posts: &[&'a Post], category: Option<&str>) -> Vec<&'a Post> {
    match category {
        None | Some("") => posts.to_vec(),
        Some(id) => posts.iter().copied().filter(|p| p.category == id).collect(),
    }
}
