//! Table of contents extraction

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::text::strip_html;

lazy_static! {
    static ref HEADING: Regex =
        Regex::new(r#"(?is)<h([2-4])\b[^>]*\bid="([^"]*)"[^>]*>(.*?)</h[2-4]>"#)
            .expect("heading pattern is valid");
}

/// A linkable heading in a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    pub text: String,
}

/// Collect `h2`-`h4` headings that carry an `id`, in document order
pub fn table_of_contents(html: &str) -> Vec<Heading> {
    HEADING
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps[1].parse().ok()?;
            Some(Heading {
                level,
                id: caps[2].to_string(),
                text: strip_html(&caps[3]).trim().to_string(),
            })
        })
        .collect()
}
