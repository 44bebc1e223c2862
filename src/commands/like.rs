//! Toggle a like on a post

use anyhow::Result;
use serde_json::json;

use super::print_json;
use crate::interactions::LikeLedger;
use crate::Blog;

pub fn run(blog: &Blog, post_id: &str, json: bool) -> Result<()> {
    let Some(post) = blog.store.post_by_id(post_id) else {
        anyhow::bail!("No post with id {:?}", post_id);
    };

    let mut ledger = LikeLedger::load(&blog.base_dir);
    let liked = ledger.toggle(&post.id);
    ledger.save(&blog.base_dir)?;

    let likes = ledger.like_count(post);
    if json {
        return print_json(&json!({ "post": post.id, "liked": liked, "likes": likes }));
    }

    if liked {
        println!("Liked {:?} ({} likes)", post.title, likes);
    } else {
        println!("Removed like from {:?} ({} likes)", post.title, likes);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_persists() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::demo(dir.path()).unwrap();

        run(&blog, "3", false).unwrap();
        assert!(LikeLedger::load(dir.path()).is_liked("3"));

        run(&blog, "3", false).unwrap();
        assert!(!LikeLedger::load(dir.path()).is_liked("3"));
    }

    #[test]
    fn test_like_unknown_post() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::demo(dir.path()).unwrap();
        assert!(run(&blog, "99", false).is_err());
        assert!(!dir.path().join(crate::interactions::STATE_DIR).exists());
    }
}
