//! Catalog repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::ports::ItemSource;
use crate::domain::DomainResult;

/// Read access to the product catalog. The full catalog is itself an
/// [`ItemSource`] so it can be paginated directly.
#[async_trait]
pub trait CatalogRepository: ItemSource<Product> {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Product>>;
    async fn find_by_supplier(&self, supplier_id: &str) -> DomainResult<Vec<Product>>;
}
