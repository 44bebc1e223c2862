//! Show one post with its related posts and page metadata

use anyhow::Result;
use serde::Serialize;

use super::print_json;
use crate::content::{Author, Category, Post};
use crate::helpers::{full_date, table_of_contents, BlogSeo, Heading, ShareLinks};
use crate::interactions::LikeLedger;
use crate::query::ScoredPost;
use crate::Blog;

/// Everything a post page needs
#[derive(Debug, Serialize)]
pub struct PostView<'a> {
    pub post: &'a Post,
    pub category: &'a Category,
    pub author: &'a Author,
    pub liked: bool,
    pub like_count: u64,
    pub related: Vec<ScoredPost<'a>>,
    pub toc: Vec<Heading>,
    pub seo: BlogSeo,
    pub share: ShareLinks,
}

/// Assemble the view of the post with `slug`, or `None` if there is none
pub fn post_view<'a>(blog: &'a Blog, slug: &str) -> Result<Option<PostView<'a>>> {
    let engine = blog.engine();
    let Some((post, related)) = engine.post_with_related(slug) else {
        return Ok(None);
    };

    let helpers = blog.helpers();
    let ledger = LikeLedger::load(&blog.base_dir);

    Ok(Some(PostView {
        post,
        category: blog.store.category_of(post)?,
        author: blog.store.author_of(post)?,
        liked: ledger.is_liked(&post.id),
        like_count: ledger.like_count(post),
        related,
        toc: table_of_contents(&post.content),
        seo: helpers.seo(&blog.store, post)?,
        share: helpers.share_links(post),
    }))
}

pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let Some(view) = post_view(blog, slug)? else {
        anyhow::bail!("No post with slug {:?}", slug);
    };

    if json {
        return print_json(&view);
    }

    let post = view.post;
    println!("{}", post.title);
    println!(
        "  {} by {} in {} - {} min read",
        full_date(&post.published_at),
        view.author.name,
        view.category.name,
        post.read_time
    );
    println!(
        "  {} views, {} likes{}",
        post.views,
        view.like_count,
        if view.liked { " (liked)" } else { "" }
    );
    if !post.tags.is_empty() {
        println!("  Tags: {}", post.tags.join(", "));
    }
    println!("  {}", view.seo.canonical_url);
    println!();
    println!("{}", post.excerpt);

    if !view.toc.is_empty() {
        println!();
        println!("Contents:");
        for heading in &view.toc {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            println!("{}{} (#{})", indent, heading.text, heading.id);
        }
    }

    if !view.related.is_empty() {
        println!();
        println!("Related:");
        for related in &view.related {
            println!("  {} [{}] score {}", related.post.title, related.post.slug, related.score);
        }
    }

    println!();
    println!("Share:");
    println!("  Twitter:  {}", view.share.twitter);
    println!("  Facebook: {}", view.share.facebook);
    println!("  LinkedIn: {}", view.share.linkedin);
    println!("  Email:    {}", view.share.email);

    Ok(())
}
