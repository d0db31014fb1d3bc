//! Order repository interface

use async_trait::async_trait;

use super::model::Order;
use crate::domain::ports::ItemSource;
use crate::domain::DomainResult;

/// Read access to the order book; all orders form an [`ItemSource`].
#[async_trait]
pub trait OrderRepository: ItemSource<Order> {
    async fn find_by_franchisee(&self, franchisee_id: &str) -> DomainResult<Vec<Order>>;
}
