//! List blog content

use anyhow::Result;

use super::print_json;
use crate::Blog;

/// List blog content by type
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let store = &blog.store;

    match content_type {
        "post" | "posts" => {
            let posts = store.recent_posts(store.len());
            if json {
                return print_json(&posts);
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] ({})",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.slug,
                    post.category
                );
            }
        }
        "category" | "categories" => {
            let summaries = crate::stats::category_summaries(store, &blog.config);
            if json {
                return print_json(&summaries);
            }
            println!("Categories ({}):", summaries.len());
            for summary in summaries {
                println!(
                    "  {} - {} ({}){}",
                    summary.category.id,
                    summary.category.name,
                    summary.post_count,
                    if summary.featured { "" } else { " [hidden]" }
                );
            }
        }
        "author" | "authors" => {
            let authors: Vec<_> = store.authors().collect();
            if json {
                return print_json(&authors);
            }
            println!("Authors ({}):", authors.len());
            for author in authors {
                let count = store.posts().iter().filter(|p| p.author == author.id).count();
                println!("  {} - {} ({})", author.id, author.name, count);
            }
        }
        "tag" | "tags" => {
            let tags = store.tag_counts();
            if json {
                return print_json(&tags);
            }
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, author, tag",
                content_type
            );
        }
    }

    Ok(())
}
