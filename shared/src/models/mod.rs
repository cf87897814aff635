//! API Data Models
//!
//! Request payloads and response DTOs for every resource. Persistent
//! entities live in the server crate; these types are the wire contract.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, CustomerCreate, CustomerQuery};
pub use order::{Order, OrderCreate, OrderLine, OrderLineRequest};
pub use product::{
    Product, ProductCreate, ProductQuery, RestockRequest, SellRequest, StockChange,
};
