//! Run a listing query

use anyhow::Result;

use super::print_json;
use crate::helpers::format_blog_date;
use crate::query::{QueryParams, SortKey};
use crate::Blog;

/// Query options as given on the command line
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    /// A URL query string; explicit options override its values
    pub url: Option<String>,
}

impl QueryArgs {
    /// Build listing parameters. An unknown sort key is an error here,
    /// unlike in a URL where it falls back to date order.
    pub fn to_params(&self) -> Result<QueryParams> {
        let mut params = match &self.url {
            Some(url) => {
                let query = url.split_once('?').map_or(url.as_str(), |(_, q)| q);
                QueryParams::from_query_string(query)
            }
            None => QueryParams::default(),
        };

        if let Some(search) = &self.search {
            params.search = search.clone();
        }
        if let Some(category) = &self.category {
            params.category = Some(category.clone()).filter(|c| !c.is_empty());
        }
        if let Some(sort) = &self.sort {
            params.sort = sort.parse::<SortKey>()?;
        }
        if let Some(page) = self.page {
            params.page = page;
        }
        if let Some(per_page) = self.per_page {
            params.per_page = Some(per_page);
        }

        Ok(params)
    }
}

pub fn run(blog: &Blog, args: &QueryArgs, json: bool) -> Result<()> {
    let params = args.to_params()?;
    let mut engine = blog.engine();
    let listing = engine.listing(&params)?;

    if json {
        return print_json(&listing);
    }

    let page = &listing.page;
    println!(
        "Page {} of {} ({} posts, sorted by {})",
        page.current, page.total_pages, page.total_items, params.sort
    );
    if listing.posts().is_empty() {
        println!("  No posts found");
    }

    let now = chrono::Utc::now();
    for post in listing.posts() {
        println!(
            "  {} - {} [{}] {} views, {} likes",
            format_blog_date(&post.published_at, &now),
            post.title,
            post.slug,
            post.views,
            post.likes
        );
    }

    if page.has_prev {
        println!("Previous: ?{}", params.with_page(page.current - 1).to_query_string());
    }
    if page.has_next {
        println!("Next: ?{}", params.with_page(page.current + 1).to_query_string());
    }

    Ok(())
}
