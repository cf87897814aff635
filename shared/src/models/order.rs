//! Order Model
//!
//! 订单 DTO 与创建请求。定价字段在创建时由定价引擎计算后展平存储，
//! 响应中原样返回。

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order line in a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Order DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    pub items: Vec<OrderLine>,
    pub subtotal: f64,
    /// Winning discount wire name (e.g. "BLACK_FRIDAY"), absent when no
    /// discount applied
    pub discount_type: Option<String>,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub region_adjustment: f64,
    pub region_adjustment_percentage: i32,
    pub final_total: f64,
    pub created_at: Option<String>,
}

/// One requested product line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1))]
    pub customer_id: String,
    #[validate(length(min = 1), nested)]
    pub products: Vec<OrderLineRequest>,
}
