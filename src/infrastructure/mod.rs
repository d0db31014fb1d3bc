//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{
    InMemoryAccounts, InMemoryCatalog, InMemoryOrderBook, InMemorySessionStore, SeedData,
};
