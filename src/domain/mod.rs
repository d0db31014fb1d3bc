//! Storefront domain: pure cores, aggregates and collaborator ports

pub mod access;
pub mod account;
pub mod catalog;
pub mod error;
pub mod order;
pub mod pagination;
pub mod ports;

pub use access::{authorize, Decision, Role, RouteRequirement, Session};
pub use account::{Account, AccountRepository};
pub use catalog::{CatalogRepository, Product};
pub use error::{DomainError, DomainResult};
pub use order::{Order, OrderLine, OrderRepository, OrderStatus};
pub use pagination::{compute_page_model, PageItem, PageModel, DEFAULT_MAX_PAGE_BUTTONS};
pub use ports::{ItemSource, SessionProvider, SessionStore};
