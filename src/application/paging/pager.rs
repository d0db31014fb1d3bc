//! Caller-owned pagination state
//!
//! The page calculator is stateless; whoever renders a paginated list owns
//! the current page. `Pager` is that owner: it keeps the page number and only
//! moves it through transitions the current page model allows.

use serde::{Deserialize, Serialize};

use crate::domain::pagination::{compute_page_model, PageModel, DEFAULT_MAX_PAGE_BUTTONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    current_page: u32,
    items_per_page: u32,
    max_page_buttons: u32,
}

impl Pager {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
        }
    }

    pub fn with_max_page_buttons(mut self, max_page_buttons: u32) -> Self {
        self.max_page_buttons = max_page_buttons;
        self
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Page model for a collection of `total_items`.
    pub fn model(&self, total_items: u64) -> PageModel {
        compute_page_model(
            total_items,
            self.items_per_page,
            self.current_page,
            self.max_page_buttons,
        )
    }

    /// Step back one page. No-op returning `false` on the first page.
    pub fn previous(&mut self, total_items: u64) -> bool {
        let model = self.model(total_items);
        if !model.has_previous {
            return false;
        }
        self.current_page = model.current_page - 1;
        true
    }

    /// Step forward one page. No-op returning `false` on the last page.
    pub fn next(&mut self, total_items: u64) -> bool {
        let model = self.model(total_items);
        if !model.has_next {
            return false;
        }
        self.current_page = model.current_page + 1;
        true
    }

    /// Jump to a page shown as a button. Pages hidden behind an ellipsis or
    /// out of range are ignored.
    pub fn select(&mut self, page: u32, total_items: u64) -> bool {
        if !self.model(total_items).is_visible(page) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Back to the first page, e.g. after the list was filtered.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull a stale page number back into range after the collection changed.
    pub fn sync(&mut self, total_items: u64) {
        self.current_page = self.model(total_items).current_page;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_on_first_page_is_a_no_op() {
        let mut pager = Pager::new(10);
        assert!(!pager.previous(132));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn next_stops_at_the_last_page() {
        let mut pager = Pager::new(10);
        let mut moves = 0;
        while pager.next(132) {
            moves += 1;
        }
        assert_eq!(moves, 13);
        assert_eq!(pager.current_page(), 14);
        assert!(!pager.next(132));
        assert_eq!(pager.current_page(), 14);
    }

    #[test]
    fn select_only_accepts_visible_pages() {
        let mut pager = Pager::new(10);
        assert!(!pager.select(9, 132));
        assert!(pager.select(14, 132));
        assert_eq!(pager.current_page(), 14);
        assert!(pager.select(11, 132));
        assert_eq!(pager.current_page(), 11);
        assert!(!pager.select(0, 132));
        assert!(!pager.select(15, 132));
    }

    #[test]
    fn sync_clamps_after_collection_shrinks() {
        let mut pager = Pager::new(10);
        pager.select(14, 132);
        pager.sync(35);
        assert_eq!(pager.current_page(), 4);
        assert!(!pager.next(35));
    }

    #[test]
    fn previous_from_a_stale_page_moves_inside_range() {
        let mut pager = Pager::new(10);
        pager.select(14, 132);
        assert!(pager.previous(35));
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pager = Pager::new(5).with_max_page_buttons(7);
        pager.next(50);
        pager.next(50);
        pager.reset();
        assert_eq!(pager.current_page(), 1);
    }
}
