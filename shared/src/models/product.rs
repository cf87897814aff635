//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub description: String,
    /// Unit price, must be positive
    #[validate(range(min = 0.01))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i64,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
}

/// Product list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Restock payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestockRequest {
    #[validate(range(min = 1))]
    pub quantity: i64,
}

/// Sell payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SellRequest {
    #[validate(range(min = 1))]
    pub quantity: i64,
}

/// Result of a stock mutation (restock / sell)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockChange {
    pub id: String,
    pub name: String,
    pub previous_stock: i64,
    /// Positive for restock, negative for sale
    pub quantity: i64,
    pub new_stock: i64,
}
