//! Page windows over an ordered listing

use serde::Serialize;

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub current: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slice page `page` (1-based) of `per_page` items out of `items`.
///
/// Page 0 and pages past the end give an empty window rather than an error.
/// A page size of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let window = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_items);
        items[start..end].to_vec()
    };

    Page {
        items: window,
        current: page,
        per_page,
        total_items,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_single_page() {
        let store = ContentStore::demo().unwrap();
        let all = store.all();
        let page = paginate(&all, 1, 9);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn test_middle_page() {
        let items: Vec<u32> = (1..=10).collect();
        let page = paginate(&items, 2, 4);
        assert_eq!(page.items, vec![5, 6, 7, 8]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_prev);

        let last = paginate(&items, 3, 4);
        assert_eq!(last.items, vec![9, 10]);
        assert!(!last.has_next);
    }

    #[test]
    fn test_out_of_range() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 7, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert!(page.has_prev);

        let zero = paginate(&items, 0, 2);
        assert!(zero.items.is_empty());
        assert!(zero.has_next);
        assert!(!zero.has_prev);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn test_zero_page_size() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec!['b']);
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<u32> = (0..23).collect();
        for per_page in 1..=25 {
            let total = paginate(&items, 1, per_page).total_pages;
            let mut joined = Vec::new();
            for page in 1..=total {
                joined.extend(paginate(&items, page, per_page).items);
            }
            assert_eq!(joined, items, "per_page {}", per_page);
        }
    }
}
