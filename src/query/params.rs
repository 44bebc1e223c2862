//! Listing parameters and their URL query-string form

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use super::SortKey;
use crate::helpers::encode_component;

/// Caller-supplied parameters for one listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub search: String,
    pub category: Option<String>,
    pub sort: SortKey,
    /// 1-based
    pub page: usize,
    /// Falls back to the configured size for the kind of listing
    pub per_page: Option<usize>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: SortKey::Date,
            page: 1,
            per_page: None,
        }
    }
}

impl QueryParams {
    /// Parse `search=..&category=..&sort=..&page=..&per_page=..`.
    ///
    /// Unknown keys are ignored. An unknown sort falls back to date order and
    /// an unparsable page to page 1, so any URL yields a listing.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match key {
                "search" | "q" => params.search = value,
                "category" => {
                    params.category = if value.is_empty() { None } else { Some(value) }
                }
                "sort" => params.sort = value.parse().unwrap_or_default(),
                "page" => params.page = value.parse::<usize>().ok().filter(|p| *p > 0).unwrap_or(1),
                "per_page" => params.per_page = value.parse::<usize>().ok().filter(|n| *n > 0),
                _ => tracing::debug!("Ignoring query parameter {:?}", key),
            }
        }

        params
    }

    /// Inverse of [`from_query_string`](Self::from_query_string); defaults are
    /// left out, so the first page of the plain listing is `""`.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search={}", encode_component(&self.search)));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={}", encode_component(category)));
        }
        if self.sort != SortKey::Date {
            parts.push(format!("sort={}", self.sort));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        if let Some(per_page) = self.per_page {
            parts.push(format!("per_page={}", per_page));
        }
        parts.join("&")
    }

    /// Whether a search term or category narrows the listing
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.category.is_some()
    }

    /// Same parameters on another page
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Changing what is listed starts over at page 1
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            search: search.to_string(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Option<&str>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }
}

/// Decode a form-encoded value: `+` is a space, then percent escapes
fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
