use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter};

/// Repository trait for Product persistence
///
/// Implementations return listings in creation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// All products, or those whose name contains the search term (case-insensitive)
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Remove a product, returning it if it existed
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let result = match filter.search_term() {
            Some(term) => {
                let needle = term.to_lowercase();
                products
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => products.clone(),
        };

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let removed = products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index));

        if removed.is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}
