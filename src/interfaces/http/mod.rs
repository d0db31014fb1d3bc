//! HTTP REST API interfaces
//!
//! - `middleware`: access gate in front of every route
//! - `modules`: request handlers grouped by storefront area
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc, API_PREFIX};
pub use state::AppState;
