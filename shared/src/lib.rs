//! Shared types for the storefront service
//!
//! Wire-level types used by the server and any client crates:
//! request/response DTOs, the unified response envelope, and common
//! domain types such as the customer region.

pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
pub use types::CustomerRegion;
