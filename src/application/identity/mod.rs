//! Identity module — mock login, sign-out and current account lookup

pub mod service;

pub use service::{IdentityService, LoginResult};
