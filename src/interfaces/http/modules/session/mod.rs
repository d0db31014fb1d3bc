//! Session module — mock login, sign-out, account and gate landing pages

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
