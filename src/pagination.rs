use serde::Serialize;

use crate::controller::{ListController, PaginationSummary};
use crate::domain::record::Record;

/// Page links shown around the current page: edges, then neighbours.
const LEFT_EDGE: usize = 1;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 2;
const RIGHT_EDGE: usize = 1;

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

/// Page numbers to render for `current_page`; `None` marks an ellipsis.
///
/// Shows the first and last page plus two pages either side of the current
/// one.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    get_pages(
        total_pages,
        current_page.max(1),
        LEFT_EDGE,
        LEFT_CURRENT,
        RIGHT_CURRENT,
        RIGHT_EDGE,
    )
}

/// One rendered page of a list with its navigation data.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub summary: PaginationSummary,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, summary: PaginationSummary) -> Self {
        Self {
            items,
            pages: page_links(summary.total_pages, summary.page),
            page: summary.page,
            summary,
        }
    }
}

impl From<&ListController> for Paginated<Record> {
    fn from(controller: &ListController) -> Self {
        Paginated::new(
            controller.current_page_items(),
            controller.pagination_summary(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_zero_total() {
        assert!(page_links(0, 1).is_empty());
    }

    #[test]
    fn short_lists_have_no_gaps() {
        assert_eq!(page_links(1, 1), vec![Some(1)]);
        assert_eq!(
            page_links(5, 3),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn gaps_around_current_page() {
        assert_eq!(
            page_links(20, 10),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn near_edges_only_one_gap() {
        assert_eq!(
            page_links(15, 1),
            vec![Some(1), Some(2), Some(3), None, Some(15)]
        );
        assert_eq!(
            page_links(15, 15),
            vec![Some(1), None, Some(13), Some(14), Some(15)]
        );
        assert_eq!(
            page_links(15, 4),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(15)]
        );
    }

    #[test]
    fn paginated_uses_summary_page() {
        let summary = PaginationSummary {
            page: 2,
            total_pages: 3,
            total_items: 25,
            first_index_shown: 11,
            last_index_shown: 20,
        };

        let paginated = Paginated::new(vec!["a", "b"], summary);

        assert_eq!(paginated.page, 2);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(paginated.items.len(), 2);
    }
}
