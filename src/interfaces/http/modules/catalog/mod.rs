//! Catalog module — public product browsing

pub mod handlers;

pub use handlers::*;
