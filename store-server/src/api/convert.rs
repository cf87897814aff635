//! 数据转换模块
//!
//! 数据库实体(RecordId)与 API DTO(字符串 ID)之间的转换。

use crate::db::models;

/// Render an optional record id as the wire form "table:key"
fn id_string(id: &Option<surrealdb::RecordId>) -> String {
    id.as_ref().map(|id| id.to_string()).unwrap_or_default()
}

impl From<models::Product> for shared::models::Product {
    fn from(entity: models::Product) -> Self {
        Self {
            id: id_string(&entity.id),
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            category: entity.category,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<models::Customer> for shared::models::Customer {
    fn from(entity: models::Customer) -> Self {
        Self {
            id: id_string(&entity.id),
            name: entity.name,
            email: entity.email,
            region: entity.region,
            created_at: entity.created_at,
        }
    }
}

impl From<models::OrderLine> for shared::models::OrderLine {
    fn from(line: models::OrderLine) -> Self {
        Self {
            product_id: line.product.to_string(),
            product_name: line.product_name,
            quantity: line.quantity.max(0) as u32,
            unit_price: line.unit_price,
            total_price: line.total_price,
        }
    }
}

impl From<models::Order> for shared::models::Order {
    fn from(entity: models::Order) -> Self {
        Self {
            id: id_string(&entity.id),
            order_number: entity.order_number,
            customer_id: entity.customer.to_string(),
            items: entity.items.into_iter().map(Into::into).collect(),
            subtotal: entity.subtotal,
            discount_type: entity.discount_type.map(|d| d.as_str().to_string()),
            discount_percentage: entity.discount_percentage,
            discount_amount: entity.discount_amount,
            region_adjustment: entity.region_adjustment,
            region_adjustment_percentage: entity.region_adjustment_percentage,
            final_total: entity.final_total,
            created_at: entity.created_at,
        }
    }
}
