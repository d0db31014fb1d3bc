//! Access module — route protection on top of the access gate
//!
//! - `routes`: which path prefixes need which roles
//! - `guard`: session lookup plus gate decision per request
//! - `navigator`: decision to navigation outcome (render, wait, redirect)

pub mod guard;
pub mod navigator;
pub mod routes;

pub use guard::RouteGuard;
pub use navigator::{safe_return_path, Navigation, RouteNavigator, REDIRECT_PARAM};
pub use routes::RouteTable;
