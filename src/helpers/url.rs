//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::BlogConfig;
use crate::content::Post;

/// Characters escaped in a URL component. Matches what browsers'
/// `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate a full URL under the blog's base URL
///
/// # Examples
/// ```ignore
/// url_for(&config, "/rss.xml") // -> "https://www.ajiapp.com/blog/rss.xml"
/// ```
pub fn url_for(config: &BlogConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Canonical URL of a post
pub fn post_url(config: &BlogConfig, post: &Post) -> String {
    url_for(config, &post.slug)
}

/// Percent-encode a single URL component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
