use async_trait::async_trait;

use crate::product::RawProduct;

/// Source of raw catalog records
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load every raw record, in catalog order
    async fn load_products(&self) -> Result<Vec<RawProduct>, CatalogError>;
}

/// Catalog-source errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog source unreadable: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("Catalog source malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<RawProduct>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<RawProduct>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn load_products(&self) -> Result<Vec<RawProduct>, CatalogError> {
        Ok(self.products.clone())
    }
}
