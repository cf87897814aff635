//! Database Models
//!
//! Entities matching the SurrealDB tables. API-facing DTO conversion
//! lives in `api::convert`.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::Customer;
pub use order::{Order, OrderLine};
pub use product::Product;
