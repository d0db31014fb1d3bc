//! In-memory adapters for the storefront ports

pub mod accounts;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod sessions;

pub use accounts::InMemoryAccounts;
pub use catalog::InMemoryCatalog;
pub use orders::InMemoryOrderBook;
pub use seed::SeedData;
pub use sessions::{InMemorySessionStore, SessionExpiry};
