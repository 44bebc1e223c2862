//! Share links for a post

use serde::Serialize;

use super::url::encode_component;

/// Ready-to-open share URLs for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub email: String,
}

/// Build share URLs for a page at `url`
pub fn share_links(url: &str, title: &str, summary: &str) -> ShareLinks {
    let url_enc = encode_component(url);
    let title_enc = encode_component(title);

    ShareLinks {
        twitter: format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            url_enc, title_enc
        ),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", url_enc),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            url_enc
        ),
        email: format!(
            "mailto:?subject={}&body={}",
            title_enc,
            encode_component(&format!("{}\n\n{}", summary, url))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links() {
        let links = share_links(
            "https://www.ajiapp.com/blog/hidden-gems-atlas-mountains",
            "Hidden Gems & Trails",
            "Villages.",
        );
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fwww.ajiapp.com%2Fblog%2Fhidden-gems-atlas-mountains&text=Hidden%20Gems%20%26%20Trails"
        );
        assert!(links
            .facebook
            .ends_with("?u=https%3A%2F%2Fwww.ajiapp.com%2Fblog%2Fhidden-gems-atlas-mountains"));
        assert!(links.email.starts_with("mailto:?subject=Hidden%20Gems%20%26%20Trails&body=Villages.%0A%0Ahttps%3A%2F%2F"));
    }
}
