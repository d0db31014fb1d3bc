//! Paginate any item source

use serde::Serialize;
use tracing::debug;

use crate::domain::pagination::{compute_page_model, PageModel};
use crate::domain::{DomainResult, ItemSource};

/// Page request as received from the caller. Missing values fall back to
/// the service defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub max_page_buttons: Option<u32>,
}

impl PageRequest {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// One page of items together with the model of its pagination bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub per_page: u32,
    pub pagination: PageModel,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            per_page: self.per_page,
            pagination: self.pagination,
        }
    }
}

/// Defaults and limits applied to every page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageService {
    default_per_page: u32,
    max_per_page: u32,
    max_page_buttons: u32,
}

impl PageService {
    pub fn new(default_per_page: u32, max_per_page: u32, max_page_buttons: u32) -> Self {
        let max_per_page = max_per_page.max(1);
        Self {
            default_per_page: default_per_page.clamp(1, max_per_page),
            max_per_page,
            max_page_buttons,
        }
    }

    pub fn max_per_page(&self) -> u32 {
        self.max_per_page
    }

    /// Page size after applying the default and the upper limit.
    pub fn resolve_per_page(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_per_page)
            .clamp(1, self.max_per_page)
    }

    /// Count `source`, compute the page model and fetch only the items of the
    /// current page.
    pub async fn paginate<T, S>(&self, source: &S, request: PageRequest) -> DomainResult<Page<T>>
    where
        S: ItemSource<T> + ?Sized,
    {
        let per_page = self.resolve_per_page(request.per_page);
        let total_items = source.count().await?;
        let pagination = compute_page_model(
            total_items,
            per_page,
            request.page.unwrap_or(1),
            request.max_page_buttons.unwrap_or(self.max_page_buttons),
        );

        let items = if total_items == 0 {
            Vec::new()
        } else {
            source.slice(pagination.item_range()).await?
        };

        debug!(
            total_items,
            page = pagination.current_page,
            total_pages = pagination.total_pages,
            returned = items.len(),
            "Paginated item source"
        );

        Ok(Page {
            items,
            total_items,
            per_page,
            pagination,
        })
    }
}

impl Default for PageService {
    fn default() -> Self {
        Self::new(10, 100, crate::domain::DEFAULT_MAX_PAGE_BUTTONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageItem;

    fn catalog() -> Vec<u32> {
        (1..=132).collect()
    }

    #[tokio::test]
    async fn returns_only_the_current_page() {
        let service = PageService::default();
        let page = service.paginate(&catalog(), PageRequest::page(7)).await.unwrap();
        assert_eq!(page.items, (61..=70).collect::<Vec<_>>());
        assert_eq!(page.total_items, 132);
        assert_eq!(page.pagination.current_page, 7);
    }

    #[tokio::test]
    async fn last_page_is_partial() {
        let service = PageService::default();
        let page = service.paginate(&catalog(), PageRequest::page(14)).await.unwrap();
        assert_eq!(page.items, vec![131, 132]);
    }

    #[tokio::test]
    async fn out_of_range_page_is_clamped() {
        let service = PageService::default();
        let page = service.paginate(&catalog(), PageRequest::page(500)).await.unwrap();
        assert_eq!(page.pagination.current_page, 14);
        assert_eq!(page.items, vec![131, 132]);
    }

    #[tokio::test]
    async fn per_page_is_limited() {
        let service = PageService::new(10, 25, 5);
        let request = PageRequest {
            per_page: Some(1_000),
            ..PageRequest::default()
        };
        let page = service.paginate(&catalog(), request).await.unwrap();
        assert_eq!(page.per_page, 25);
        assert_eq!(page.items.len(), 25);
        assert_eq!(page.pagination.total_pages, 6);
    }

    #[tokio::test]
    async fn empty_source_suppresses_pagination() {
        let service = PageService::default();
        let page = service
            .paginate(&Vec::<u32>::new(), PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.pagination.should_render);
        assert_eq!(page.pagination.visible, vec![PageItem::page(1)]);
    }

    #[tokio::test]
    async fn custom_button_budget() {
        let service = PageService::default();
        let request = PageRequest {
            page: Some(7),
            max_page_buttons: Some(3),
            ..PageRequest::default()
        };
        let page = service.paginate(&catalog(), request).await.unwrap();
        assert_eq!(
            page.pagination.visible,
            vec![
                PageItem::page(1),
                PageItem::Ellipsis,
                PageItem::page(7),
                PageItem::Ellipsis,
                PageItem::page(14)
            ]
        );
    }
}
