//! Supplier module — own catalog

pub mod handlers;

pub use handlers::*;
