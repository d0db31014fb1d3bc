//! Access domain: roles, sessions and the route authorization gate

pub mod gate;
pub mod role;
pub mod session;

pub use gate::{authorize, Decision, RouteRequirement};
pub use role::{Role, UnknownRole};
pub use session::Session;
