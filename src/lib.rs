//! # Storefront
//!
//! Multi-role e-commerce storefront over mock in-memory data: public
//! catalog browsing, a franchisee order dashboard, a supplier catalog and
//! an admin panel.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: pure cores (page model computation, access decisions),
//!   entities and ports
//! - **application**: pagers, page service, route guard and navigator,
//!   mock identity service
//! - **infrastructure**: in-memory repositories, session store, seed data
//! - **interfaces**: axum REST API with the access gate middleware and
//!   Swagger documentation
//! - **server**: runtime lifecycle shared by the binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::{authorize, compute_page_model, Decision, PageItem, PageModel, Role, Session};

// Re-export API router
pub use interfaces::http::create_api_router;
