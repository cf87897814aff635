//! Order Model
//!
//! 订单只在创建时写入一次，定价结果展平存储以便报表查询无需重算。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::pricing::DiscountType;

/// Denormalized order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: RecordId,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub order_number: String,
    pub customer: RecordId,
    pub items: Vec<OrderLine>,
    pub subtotal: f64,
    pub discount_type: Option<DiscountType>,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub region_adjustment: f64,
    pub region_adjustment_percentage: i32,
    pub final_total: f64,
    pub created_at: Option<String>,
}
