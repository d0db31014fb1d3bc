//! Franchisee module — order dashboard

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
