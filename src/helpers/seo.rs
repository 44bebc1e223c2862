//! SEO metadata for a single post

use serde::Serialize;
use serde_json::json;

use super::date::date_xml;
use super::url::{post_url, url_for};
use crate::config::BlogConfig;
use crate::content::{ContentStore, Post};
use crate::error::ContentError;

/// Open Graph fields for a post
#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author: String,
    pub published_time: String,
    pub section: String,
    pub tags: Vec<String>,
    pub locale: String,
}

/// Page metadata for a post
#[derive(Debug, Clone, Serialize)]
pub struct BlogSeo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    /// schema.org `BlogPosting` document
    pub structured_data: serde_json::Value,
}

/// Build the metadata for a post page
pub fn generate_blog_seo(
    config: &BlogConfig,
    store: &ContentStore,
    post: &Post,
) -> Result<BlogSeo, ContentError> {
    let author = store.author_of(post)?;
    let category = store.category_of(post)?;
    let canonical_url = post_url(config, post);
    let published = date_xml(&post.published_at);

    let title = format!(
        "{}{}{}",
        post.title, config.seo.title_separator, config.seo.title_suffix
    );

    let mut keywords = post.tags.clone();
    for keyword in &config.seo.keywords {
        if !keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            keywords.push(keyword.clone());
        }
    }

    let structured_data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "image": post.image,
        "author": {
            "@type": "Person",
            "name": author.name,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.seo.publisher,
            "logo": {
                "@type": "ImageObject",
                "url": url_for(config, &config.seo.logo),
            },
        },
        "datePublished": published,
        "dateModified": published,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": canonical_url,
        },
    });

    Ok(BlogSeo {
        title,
        description: post.excerpt.clone(),
        keywords,
        canonical_url,
        open_graph: OpenGraph {
            title: post.title.clone(),
            description: post.excerpt.clone(),
            image: post.image.clone(),
            kind: "article".to_string(),
            author: author.name.clone(),
            published_time: published.clone(),
            section: category.name.clone(),
            tags: post.tags.clone(),
            locale: config.seo.open_graph_locale.clone(),
        },
        structured_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_blog_seo() {
        let config = BlogConfig::default();
        let store = ContentStore::demo().unwrap();
        let post = store.post_by_slug("complete-guide-esim-morocco").unwrap();

        let seo = generate_blog_seo(&config, &store, post).unwrap();
        assert_eq!(
            seo.title,
            "Complete Guide to Using eSIM in Morocco - AJI Blog | Your Guide to Morocco"
        );
        assert_eq!(
            seo.canonical_url,
            "https://www.ajiapp.com/blog/complete-guide-esim-morocco"
        );
        assert_eq!(seo.open_graph.section, "Travel Tech");
        assert_eq!(seo.open_graph.author, "AJI Team");
        assert_eq!(seo.keywords.first().map(String::as_str), Some("eSIM"));
        assert!(seo.keywords.contains(&"Morocco".to_string()));
        assert_eq!(seo.structured_data["@type"], "BlogPosting");
        assert_eq!(seo.structured_data["author"]["name"], "AJI Team");
        assert_eq!(
            seo.structured_data["datePublished"],
            "2025-01-25T10:00:00+00:00"
        );
    }

    #[test]
    fn test_generate_blog_seo_dangling_reference() {
        let config = BlogConfig::default();
        let store = ContentStore::demo().unwrap();
        let mut post = store.post_by_id("1").unwrap().clone();
        post.author = "ghost".to_string();

        let err = generate_blog_seo(&config, &store, &post).unwrap_err();
        assert!(matches!(err, ContentError::UnknownAuthor { .. }));
    }
}
