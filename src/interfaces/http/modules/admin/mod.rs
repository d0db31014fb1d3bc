//! Admin module — account directory and order overview

pub mod handlers;

pub use handlers::*;
