//! The listing pipeline: search, category filter, sort, paginate

use serde::Serialize;

use super::{filter_by_category, paginate, related_posts, search_with_min, sort, Page};
use super::{QueryParams, ScoredPost};
use crate::config::BlogConfig;
use crate::content::{ContentStore, Post};
use crate::error::ContentError;

/// One page of a listing with the parameters that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<'a> {
    pub params: QueryParams,
    pub has_active_filters: bool,
    #[serde(flatten)]
    pub page: Page<&'a Post>,
}

impl<'a> Listing<'a> {
    pub fn posts(&self) -> &[&'a Post] {
        &self.page.items
    }
}

/// Run the full pipeline once, without caching
pub fn run_pipeline<'a>(
    store: &'a ContentStore,
    config: &BlogConfig,
    params: &QueryParams,
) -> Result<Listing<'a>, ContentError> {
    let all = store.all();
    let found = search_with_min(store, &all, &params.search, config.search.min_length)?;
    let filtered = filter_by_category(&found, params.category.as_deref());
    let ordered = sort(&filtered, params.sort);

    let per_page = params
        .per_page
        .unwrap_or_else(|| config.page_size_for(params));
    let page = paginate(&ordered, params.page, per_page);

    Ok(Listing {
        params: params.clone(),
        has_active_filters: params.has_active_filters(),
        page,
    })
}

/// Query engine over a content store
///
/// Remembers the listing for the last parameters it was asked for; asking
/// with different parameters recomputes from the search stage.
pub struct QueryEngine<'a> {
    store: &'a ContentStore,
    config: &'a BlogConfig,
    cache: Option<(QueryParams, Listing<'a>)>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a ContentStore, config: &'a BlogConfig) -> Self {
        Self {
            store,
            config,
            cache: None,
        }
    }

    pub fn store(&self) -> &'a ContentStore {
        self.store
    }

    /// Listing for `params`, served from cache when the parameters are
    /// unchanged since the last call
    pub fn listing(&mut self, params: &QueryParams) -> Result<Listing<'a>, ContentError> {
        if let Some((cached, listing)) = &self.cache {
            if cached == params {
                tracing::debug!("Listing cache hit for {:?}", params);
                return Ok(listing.clone());
            }
        }

        tracing::debug!("Running listing pipeline for {:?}", params);
        let listing = run_pipeline(self.store, self.config, params)?;
        self.cache = Some((params.clone(), listing.clone()));
        Ok(listing)
    }

    /// Whether the next call with `params` will be served from cache
    pub fn is_cached(&self, params: &QueryParams) -> bool {
        matches!(&self.cache, Some((cached, _)) if cached == params)
    }

    /// Drop the cached listing
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// Post and its related posts, looked up by slug. Unknown slugs give
    /// `None`.
    pub fn post_with_related(&self, slug: &str) -> Option<(&'a Post, Vec<ScoredPost<'a>>)> {
        let post = self.store.post_by_slug(slug)?;
        let related = related_posts(post, &self.store.all(), self.config.related.max_results);
        Some((post, related))
    }
}
