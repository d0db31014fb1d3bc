use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog product as offered by a supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u32,
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Price in minor currency units (cents)
    pub price: u64,
    pub currency: String,
    pub stock: u32,
    /// Account id of the supplying account
    pub supplier_id: String,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
