//! Order DTOs shared by the franchisee dashboard and the admin panel

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Order, OrderLine, OrderStatus};

/// Order with its computed totals
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub franchisee_id: String,
    pub status: OrderStatus,
    pub is_open: bool,
    pub lines: Vec<OrderLine>,
    pub item_count: u32,
    /// Order total in minor currency units
    pub total: u64,
    pub currency: String,
    pub billing_address: String,
    pub placed_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            is_open: order.status.is_open(),
            item_count: order.item_count(),
            total: order.total(),
            id: order.id,
            franchisee_id: order.franchisee_id,
            status: order.status,
            lines: order.lines,
            currency: order.currency,
            billing_address: order.billing_address,
            placed_at: order.placed_at,
        }
    }
}
