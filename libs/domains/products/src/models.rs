use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (UUIDv7, time ordered)
    pub id: Uuid,
    #[schema(example = "Desk lamp")]
    pub name: String,
    #[schema(example = 24.5)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        }
    }
}

/// Body of `POST /products`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        required(message = "Name and price are required."),
        length(min = 1, message = "Name and price are required.")
    )]
    #[schema(example = "Desk lamp")]
    pub name: Option<String>,
    #[validate(
        required(message = "Name and price are required."),
        range(min = 0.0, message = "Price must be a non-negative number.")
    )]
    #[schema(example = 24.5)]
    pub price: Option<f64>,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    /// The search term, or `None` when absent or blank
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Response of `POST /products`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "Product listing created.")]
    pub message: String,
    pub product: Product,
}

/// Response of `GET /products`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}
