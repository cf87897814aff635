//! Customer Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::CustomerRegion;

/// Customer DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub region: CustomerRegion,
    pub created_at: Option<String>,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Defaults to US when absent
    pub region: Option<CustomerRegion>,
}

/// Customer list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerQuery {
    pub region: Option<CustomerRegion>,
}
