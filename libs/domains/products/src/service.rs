//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{INVALID_PRICE, MISSING_FIELDS, ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new listing
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let (name, price) = match (input.name, input.price) {
            (Some(name), Some(price)) if !name.is_empty() => (name, price),
            _ => return Err(ProductError::Validation(MISSING_FIELDS.to_string())),
        };

        if !price.is_finite() || price < 0.0 {
            return Err(ProductError::Validation(INVALID_PRICE.to_string()));
        }

        self.repository.create(Product::new(name, price)).await
    }

    /// List products, narrowed by a case-insensitive name search
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Delete a product by its id string.
    ///
    /// An id that is not a UUID cannot name a product, so it is not found.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        let uuid = Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))?;

        self.repository
            .delete(uuid)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}
