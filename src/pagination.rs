use serde::{Deserialize, Serialize};

use crate::api::QueryPairs;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// One page of a server-side paginated listing, expressed the way the backend
/// expects it: `skip`/`take` derived from a 1-based page number.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            page_size,
        }
    }

    pub fn skip(self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn take(self) -> usize {
        self.page_size
    }

    /// Appends the `skip`/`take` pair to an outgoing query string.
    pub fn apply(self, pairs: &mut QueryPairs) {
        pairs.set("skip", self.skip());
        pairs.set("take", self.take());
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// A rendered page of rows plus the windowed page links for the pager
/// (`None` marks an ellipsis).
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_two_of_ten_skips_ten() {
        let query = PageQuery::new(2, 10);
        assert_eq!(query.skip(), 10);
        assert_eq!(query.take(), 10);
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let query = PageQuery::new(0, 25);
        assert_eq!(query.skip(), 0);
        assert_eq!(query.take(), 25);
    }

    #[test]
    fn skip_take_reach_the_query_string() {
        let mut pairs = QueryPairs::new();
        PageQuery::new(3, 20).apply(&mut pairs);
        assert_eq!(pairs.encode(), "skip=40&take=20");
    }

    #[test]
    fn no_pages_for_empty_results() {
        let paginated: Paginated<u8> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
    }

    #[test]
    fn long_page_lists_are_windowed_with_gaps() {
        let paginated: Paginated<u8> = Paginated::new(vec![], 10, 30);
        let pages = paginated.pages;
        assert_eq!(pages.first(), Some(&Some(1)));
        assert_eq!(pages.last(), Some(&Some(30)));
        assert!(pages.contains(&None));
        assert!(pages.contains(&Some(10)));
    }
}
