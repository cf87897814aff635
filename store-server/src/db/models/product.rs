//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    /// Free-form category tag, matched case-insensitively by holiday promos
    pub category: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
