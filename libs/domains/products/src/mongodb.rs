//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{self, Document, doc},
    options::{FindOptions, IndexOptions},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

/// Stored shape of a product: string `_id`, BSON date.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    price: f64,
    created_at: bson::DateTime,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            created_at: bson::DateTime::from_millis(product.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<ProductDocument> for Product {
    type Error = ProductError;

    fn try_from(doc: ProductDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| ProductError::Internal(format!("Stored product id '{}': {}", doc.id, e)))?;

        Ok(Product {
            id,
            name: doc.name,
            price: doc.price,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
        })
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "created_at": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Build a MongoDB filter document from ProductFilter
    ///
    /// The term is matched literally: regex metacharacters are escaped.
    fn build_filter(filter: &ProductFilter) -> Document {
        match filter.search_term() {
            Some(term) => doc! {
                "name": { "$regex": regex::escape(term), "$options": "i" }
            },
            None => doc! {},
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection
            .insert_one(ProductDocument::from(&product))
            .await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": 1, "_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        documents.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let removed = self
            .collection
            .find_one_and_delete(doc! { "_id": id.to_string() })
            .await?;

        if removed.is_some() {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        removed.map(Product::try_from).transpose()
    }
}
