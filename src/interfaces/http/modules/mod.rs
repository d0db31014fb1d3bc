pub mod admin;
pub mod catalog;
pub mod franchisee;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod session;
pub mod supplier;
