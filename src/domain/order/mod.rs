//! Order aggregate

pub mod model;
pub mod repository;

pub use model::{Order, OrderLine, OrderStatus};
pub use repository::OrderRepository;
