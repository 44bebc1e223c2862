//! Blog statistics

use anyhow::Result;

use super::print_json;
use crate::stats::blog_stats;
use crate::Blog;

pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let stats = blog_stats(&blog.store, &blog.config);
    if json {
        return print_json(&stats);
    }

    println!("Posts:             {}", stats.total_posts);
    println!("Featured:          {}", stats.featured_posts);
    println!("Views:             {}", stats.total_views);
    println!("Likes:             {}", stats.total_likes);
    println!("Average read time: {} min", stats.average_read_time);

    println!("Categories:");
    for summary in &stats.categories {
        println!("  {} ({})", summary.category.name, summary.post_count);
    }

    println!("Most popular:");
    for (rank, post) in stats.popular_posts.iter().enumerate() {
        println!("  {}. {} ({})", rank + 1, post.title, post.popularity());
    }

    Ok(())
}
