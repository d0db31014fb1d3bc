//! Page model computation
//!
//! Turns `(total_items, items_per_page, current_page, max_page_buttons)` into
//! everything a pagination bar needs: the page count, the visible item range,
//! the previous/next flags and the sequence of page buttons with ellipsis
//! markers where runs of pages are elided.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default rendering budget for page buttons.
pub const DEFAULT_MAX_PAGE_BUTTONS: u32 = 5;

/// Smallest button budget that can show first, current and last page.
pub const MIN_PAGE_BUTTONS: u32 = 3;

/// A single entry of the page-button sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageItem {
    /// A selectable page number (1-based)
    Page { number: u32 },
    /// Placeholder for an elided run of page numbers
    Ellipsis,
}

impl PageItem {
    pub fn page(number: u32) -> Self {
        Self::Page { number }
    }

    /// Page number, `None` for an ellipsis.
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Page { number } => Some(*number),
            Self::Ellipsis => None,
        }
    }
}

/// Everything needed to render one pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageModel {
    /// Number of pages, never less than 1
    pub total_pages: u32,
    /// Current page after clamping into `[1, total_pages]`
    pub current_page: u32,
    /// First visible item (1-based, inclusive), `0` when there are no items
    pub start_item: u64,
    /// Last visible item (1-based, inclusive), `0` when there are no items
    pub end_item: u64,
    /// Page buttons in display order
    pub visible: Vec<PageItem>,
    pub has_previous: bool,
    pub has_next: bool,
    /// `false` when the whole pagination bar must be suppressed
    pub should_render: bool,
}

impl PageModel {
    /// Zero-based half-open index range of the items on the current page.
    pub fn item_range(&self) -> Range<usize> {
        if self.end_item == 0 {
            return 0..0;
        }
        (self.start_item - 1) as usize..self.end_item as usize
    }

    /// Whether `page` is one of the selectable page buttons.
    pub fn is_visible(&self, page: u32) -> bool {
        self.visible.iter().any(|item| item.number() == Some(page))
    }

    /// Page numbers of the visible buttons, ellipses skipped.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.visible.iter().filter_map(PageItem::number)
    }
}

/// `max(1, ceil(total_items / items_per_page))`; a zero page size counts as 1.
pub fn total_pages(total_items: u64, items_per_page: u32) -> u32 {
    let per_page = u64::from(items_per_page.max(1));
    let pages = total_items.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Compute the page model for one render of a pagination bar.
///
/// Never fails. Out-of-range inputs are clamped: `items_per_page` to at
/// least 1, `max_page_buttons` to at least [`MIN_PAGE_BUTTONS`] and
/// `current_page` into `[1, total_pages]`.
pub fn compute_page_model(
    total_items: u64,
    items_per_page: u32,
    current_page: u32,
    max_page_buttons: u32,
) -> PageModel {
    let items_per_page = items_per_page.max(1);
    let max_page_buttons = max_page_buttons.max(MIN_PAGE_BUTTONS);
    let total_pages = total_pages(total_items, items_per_page);
    let current_page = current_page.clamp(1, total_pages);

    let (start_item, end_item) = if total_items == 0 {
        (0, 0)
    } else {
        let per_page = u64::from(items_per_page);
        let start = u64::from(current_page - 1) * per_page + 1;
        let end = (u64::from(current_page) * per_page).min(total_items);
        (start, end)
    };

    PageModel {
        total_pages,
        current_page,
        start_item,
        end_item,
        visible: visible_pages(total_pages, current_page, max_page_buttons),
        has_previous: current_page > 1,
        has_next: current_page < total_pages,
        should_render: total_items > 0 && total_pages > 1,
    }
}

fn visible_pages(total_pages: u32, current_page: u32, max_page_buttons: u32) -> Vec<PageItem> {
    if total_pages <= max_page_buttons {
        return (1..=total_pages).map(PageItem::page).collect();
    }

    // total_pages > max_page_buttons >= 3, so 2 <= total_pages - 1
    let last_inner = total_pages - 1;
    let siblings = (max_page_buttons - 2) / 2;
    let inner_span = max_page_buttons - 3;

    let mut left = current_page.saturating_sub(siblings).max(2);
    let mut right = current_page.saturating_add(siblings).min(last_inner);

    let show_left_dots = left > 2;
    let show_right_dots = right < last_inner;

    if !show_left_dots && show_right_dots {
        left = 2;
        right = (left + inner_span).min(last_inner);
    } else if show_left_dots && !show_right_dots {
        right = last_inner;
        left = right.saturating_sub(inner_span).max(2);
    }

    let mut visible = Vec::with_capacity((right - left + 5) as usize);
    visible.push(PageItem::page(1));
    if show_left_dots {
        visible.push(PageItem::Ellipsis);
    }
    visible.extend((left..=right).map(PageItem::page));
    if show_right_dots {
        visible.push(PageItem::Ellipsis);
    }
    visible.push(PageItem::page(total_pages));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const E: PageItem = PageItem::Ellipsis;

    fn p(number: u32) -> PageItem {
        PageItem::page(number)
    }

    #[test]
    fn first_page_of_fourteen() {
        let model = compute_page_model(132, 10, 1, 5);
        assert_eq!(model.total_pages, 14);
        assert_eq!(model.visible, vec![p(1), p(2), p(3), p(4), E, p(14)]);
        assert_eq!((model.start_item, model.end_item), (1, 10));
        assert!(!model.has_previous);
        assert!(model.has_next);
        assert!(model.should_render);
    }

    #[test]
    fn middle_page_shows_both_ellipses() {
        let model = compute_page_model(132, 10, 7, 5);
        assert_eq!(model.visible, vec![p(1), E, p(6), p(7), p(8), E, p(14)]);
        assert_eq!((model.start_item, model.end_item), (61, 70));
    }

    #[test]
    fn last_page_expands_to_the_left() {
        let model = compute_page_model(132, 10, 14, 5);
        assert_eq!(model.visible, vec![p(1), E, p(11), p(12), p(13), p(14)]);
        assert_eq!((model.start_item, model.end_item), (131, 132));
        assert!(!model.has_next);
    }

    #[test]
    fn near_left_edge_has_no_left_ellipsis() {
        let model = compute_page_model(132, 10, 3, 5);
        assert_eq!(model.visible, vec![p(1), p(2), p(3), p(4), E, p(14)]);
    }

    #[test]
    fn few_pages_are_listed_without_ellipsis() {
        let model = compute_page_model(45, 10, 2, 5);
        assert_eq!(model.total_pages, 5);
        assert_eq!(model.visible, vec![p(1), p(2), p(3), p(4), p(5)]);
    }

    #[test]
    fn wider_budget_uses_more_siblings() {
        let model = compute_page_model(200, 10, 10, 7);
        assert_eq!(model.visible, vec![p(1), E, p(8), p(9), p(10), p(11), p(12), E, p(20)]);
    }

    #[test]
    fn even_budget_middle_page() {
        let model = compute_page_model(200, 10, 10, 6);
        assert_eq!(model.visible, vec![p(1), E, p(8), p(9), p(10), p(11), p(12), E, p(20)]);
    }

    #[test]
    fn even_budget_at_both_edges() {
        let first = compute_page_model(200, 10, 1, 6);
        assert_eq!(first.visible, vec![p(1), p(2), p(3), p(4), p(5), E, p(20)]);

        let last = compute_page_model(200, 10, 20, 6);
        assert_eq!(last.visible, vec![p(1), E, p(16), p(17), p(18), p(19), p(20)]);
    }

    #[test]
    fn even_budget_expansion_can_shrink_the_window() {
        // siblings reach page 6, the edge expansion stops at 2 + 3
        let model = compute_page_model(200, 10, 4, 6);
        assert_eq!(model.visible, vec![p(1), p(2), p(3), p(4), p(5), E, p(20)]);

        let model = compute_page_model(200, 10, 5, 6);
        assert_eq!(model.visible, vec![p(1), E, p(3), p(4), p(5), p(6), p(7), E, p(20)]);
    }

    #[test]
    fn empty_collection_does_not_render() {
        let model = compute_page_model(0, 10, 1, 5);
        assert_eq!(model.total_pages, 1);
        assert_eq!((model.start_item, model.end_item), (0, 0));
        assert!(!model.should_render);
        assert!(!model.has_previous);
        assert!(!model.has_next);
        assert_eq!(model.item_range(), 0..0);
    }

    #[test]
    fn current_page_past_the_end_is_clamped() {
        let model = compute_page_model(132, 10, 99, 5);
        assert_eq!(model.current_page, 14);
        assert!(!model.has_next);
        assert!(model.has_previous);
        assert_eq!(model.visible, vec![p(1), E, p(11), p(12), p(13), p(14)]);
        assert!(model.start_item <= model.end_item);
    }

    #[test]
    fn zero_page_and_zero_page_size_are_clamped() {
        let model = compute_page_model(3, 0, 0, 1);
        assert_eq!(model.current_page, 1);
        assert_eq!(model.total_pages, 3);
        assert_eq!((model.start_item, model.end_item), (1, 1));
        assert_eq!(model.visible, vec![p(1), p(2), p(3)]);
    }

    #[test]
    fn item_range_matches_visible_items() {
        let model = compute_page_model(25, 10, 3, 5);
        assert_eq!(model.item_range(), 20..25);
        assert!(model.is_visible(2));
        assert!(!model.is_visible(4));
    }

    proptest! {
        #[test]
        fn single_page_never_renders(total in 0u64..500, per_page in 1u32..500) {
            prop_assume!(total <= u64::from(per_page));
            let model = compute_page_model(total, per_page, 1, DEFAULT_MAX_PAGE_BUTTONS);
            prop_assert!(!model.should_render);
        }

        #[test]
        fn item_bounds_are_consistent(
            total in 1u64..10_000,
            per_page in 1u32..200,
            page in 0u32..1_000,
            buttons in 0u32..12,
        ) {
            let model = compute_page_model(total, per_page, page, buttons);
            prop_assert!(model.start_item >= 1);
            prop_assert!(model.start_item <= model.end_item);
            prop_assert!(model.end_item <= total);
        }

        #[test]
        fn total_pages_is_ceiling(total in 0u64..10_000, per_page in 1u32..200) {
            let expected = std::cmp::max(1, total.div_ceil(u64::from(per_page)));
            prop_assert_eq!(u64::from(total_pages(total, per_page)), expected);
        }

        #[test]
        fn computation_is_idempotent(
            total in 0u64..10_000,
            per_page in 1u32..200,
            page in 0u32..1_000,
            buttons in 0u32..12,
        ) {
            prop_assert_eq!(
                compute_page_model(total, per_page, page, buttons),
                compute_page_model(total, per_page, page, buttons)
            );
        }

        #[test]
        fn visible_pages_are_ordered_and_bounded(
            total in 1u64..10_000,
            per_page in 1u32..50,
            page in 1u32..500,
            buttons in 3u32..12,
        ) {
            let model = compute_page_model(total, per_page, page, buttons);
            let numbers: Vec<u32> = model.page_numbers().collect();
            prop_assert_eq!(numbers.first().copied(), Some(1));
            prop_assert_eq!(numbers.last().copied(), Some(model.total_pages));
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(model.is_visible(model.current_page));
            prop_assert!(model.visible.windows(2).all(|w| !(w[0] == E && w[1] == E)));
        }
    }
}
