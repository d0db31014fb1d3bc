//! In-memory product catalog

use std::ops::Range;

use async_trait::async_trait;

use crate::domain::{CatalogRepository, DomainResult, ItemSource, Product};

pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        Self { products }
    }
}

#[async_trait]
impl ItemSource<Product> for InMemoryCatalog {
    async fn count(&self) -> DomainResult<u64> {
        self.products.count().await
    }

    async fn slice(&self, range: Range<usize>) -> DomainResult<Vec<Product>> {
        self.products.slice(range).await
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| self.products[idx].clone()))
    }

    async fn find_by_supplier(&self, supplier_id: &str) -> DomainResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.supplier_id == supplier_id)
            .cloned()
            .collect())
    }
}
