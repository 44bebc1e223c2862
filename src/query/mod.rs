//! Content query engine
//!
//! Pure functions over slices of post references, plus [`QueryEngine`]
//! which chains them for listing views. Nothing here mutates the store.

mod filter;
mod paginate;
mod params;
mod pipeline;
mod related;
mod search;
mod sort;

pub use filter::filter_by_category;
pub use paginate::{paginate, Page};
pub use params::QueryParams;
pub use pipeline::{run_pipeline, Listing, QueryEngine};
pub use related::{
    related_posts, relevance, ScoredPost, RECENCY_SCORE, RECENCY_WINDOW_DAYS,
    SAME_CATEGORY_SCORE, SHARED_TAG_SCORE,
};
pub use search::{search, search_with_min, MIN_SEARCH_LENGTH};
pub use sort::{compare_titles, sort, ParseSortKeyError, SortKey};
