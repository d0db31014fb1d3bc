//! In-memory order book

use std::ops::Range;

use async_trait::async_trait;

use crate::domain::{DomainResult, ItemSource, Order, OrderRepository};

/// Orders kept newest first, the way the dashboards list them.
pub struct InMemoryOrderBook {
    orders: Vec<Order>,
}

impl InMemoryOrderBook {
    pub fn new(mut orders: Vec<Order>) -> Self {
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at).then_with(|| a.id.cmp(&b.id)));
        Self { orders }
    }
}

#[async_trait]
impl ItemSource<Order> for InMemoryOrderBook {
    async fn count(&self) -> DomainResult<u64> {
        self.orders.count().await
    }

    async fn slice(&self, range: Range<usize>) -> DomainResult<Vec<Order>> {
        self.orders.slice(range).await
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderBook {
    async fn find_by_franchisee(&self, franchisee_id: &str) -> DomainResult<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.franchisee_id == franchisee_id)
            .cloned()
            .collect())
    }
}
