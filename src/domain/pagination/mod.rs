//! Pagination domain: pure page-model computation

pub mod model;

pub use model::{
    compute_page_model, total_pages, PageItem, PageModel, DEFAULT_MAX_PAGE_BUTTONS,
    MIN_PAGE_BUTTONS,
};
