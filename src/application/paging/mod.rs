//! Paging module: caller-owned page state and item-source pagination

pub mod pager;
pub mod service;

pub use pager::Pager;
pub use service::{Page, PageRequest, PageService};
