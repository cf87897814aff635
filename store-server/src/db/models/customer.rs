//! Customer Model

use serde::{Deserialize, Serialize};
use shared::CustomerRegion;
use surrealdb::RecordId;

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Stored lowercased; unique index defined at boot
    pub email: String,
    pub region: CustomerRegion,
    pub created_at: Option<String>,
}
