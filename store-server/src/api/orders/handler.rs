//! Order API Handlers
//!
//! 订单创建流程: 校验请求 -> 查客户 -> 逐行查商品并检查库存 ->
//! 定价引擎计算 -> 单事务内扣库存并落单。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::repo_error;
use crate::core::ServerState;
use crate::db::models;
use crate::db::repository::StockDecrement;
use crate::pricing::{compute_pricing, OrderItem};
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderCreate};

/// 订单号: "SO-" + UUID 前 8 位大写
fn new_order_number() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("SO-{}", id[..8].to_uppercase())
}

/// POST /api/orders - 创建订单
///
/// 定价以服务器本地日期为准。库存检查在事务外做一次预检，
/// 扣减本身与落单在同一事务内执行。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    payload.validate()?;

    let customer = state
        .customers
        .find_by_id(&payload.customer_id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Customer {} not found", payload.customer_id))
        })?;
    let customer_id = customer
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Customer record has no id"))?;

    let mut pricing_items: Vec<OrderItem> = Vec::with_capacity(payload.products.len());
    let mut lines: Vec<models::OrderLine> = Vec::with_capacity(payload.products.len());
    let mut decrements: Vec<StockDecrement> = Vec::with_capacity(payload.products.len());

    for request in &payload.products {
        let product = state
            .products
            .find_by_id(&request.product_id)
            .await
            .map_err(repo_error)?
            .ok_or_else(|| {
                AppError::not_found(format!("Product {} not found", request.product_id))
            })?;

        if product.stock < i64::from(request.quantity) {
            return Err(AppError::business_rule(format!(
                "Insufficient stock for product \"{}\". Available: {}, Requested: {}",
                product.name, product.stock, request.quantity
            )));
        }

        let product_id = product
            .id
            .ok_or_else(|| AppError::internal("Product record has no id"))?;

        pricing_items.push(OrderItem {
            product_id: product_id.to_string(),
            product_name: product.name.clone(),
            category: product.category,
            quantity: request.quantity,
            unit_price: product.price,
        });
        lines.push(models::OrderLine {
            product: product_id.clone(),
            product_name: product.name,
            quantity: i64::from(request.quantity),
            unit_price: product.price,
            total_price: product.price * f64::from(request.quantity),
        });
        decrements.push(StockDecrement {
            product: product_id,
            quantity: i64::from(request.quantity),
        });
    }

    let order_date = chrono::Local::now().date_naive();
    let pricing = compute_pricing(&pricing_items, customer.region, order_date);

    let order = models::Order {
        id: None,
        order_number: new_order_number(),
        customer: customer_id,
        items: lines,
        subtotal: pricing.subtotal,
        discount_type: pricing.discount.as_ref().map(|d| d.discount_type),
        discount_percentage: pricing
            .discount
            .as_ref()
            .map(|d| d.percentage)
            .unwrap_or(0.0),
        discount_amount: pricing.discount_amount,
        region_adjustment: pricing.region_adjustment,
        region_adjustment_percentage: pricing.region_adjustment_percentage,
        final_total: pricing.final_total,
        created_at: Some(chrono::Utc::now().to_rfc3339()),
    };

    let created = state
        .orders
        .create(order, decrements)
        .await
        .map_err(repo_error)?;
    tracing::info!(
        "Created order {}: {} line(s), final total {}",
        created.order_number,
        created.items.len(),
        created.final_total
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/orders/{id} - 订单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .find_by_id(&id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order.into()))
}

/// GET /api/orders/by-customer/{customer_id} - 按客户列订单
pub async fn list_by_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state
        .orders
        .find_by_customer(&customer_id)
        .await
        .map_err(repo_error)?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use shared::models::{CustomerCreate, OrderLineRequest, ProductCreate};
    use shared::CustomerRegion;

    #[tokio::test]
    async fn order_exceeding_stock_is_rejected_and_stock_untouched() {
        let state = ServerState::initialize_in_memory(&Config::default())
            .await
            .unwrap();

        let product = state
            .products
            .create(ProductCreate {
                name: "Keyboard".to_string(),
                description: "Mechanical keyboard".to_string(),
                price: 49.99,
                stock: 5,
                category: "electronics".to_string(),
            })
            .await
            .unwrap();
        let product_id = product.id.unwrap().to_string();

        let customer = state
            .customers
            .create(CustomerCreate {
                name: "Ola".to_string(),
                email: "ola@example.com".to_string(),
                region: Some(CustomerRegion::Us),
            })
            .await
            .unwrap();
        let customer_id = customer.id.unwrap().to_string();

        let payload = OrderCreate {
            customer_id: customer_id.clone(),
            products: vec![OrderLineRequest {
                product_id: product_id.clone(),
                quantity: 10,
            }],
        };

        let err = create(State(state.clone()), Json(payload))
            .await
            .expect_err("order above stock must be rejected");
        match err {
            AppError::BusinessRule(msg) => {
                assert!(msg.contains("Insufficient stock"), "got {msg}");
                assert!(msg.contains("Available: 5, Requested: 10"), "got {msg}");
            }
            other => panic!("expected business rule error, got {other:?}"),
        }

        // 拒绝发生在事务之前，库存不能被动过
        let after = state
            .products
            .find_by_id(&product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.stock, 5);

        // 也不能留下订单
        let orders = state.orders.find_by_customer(&customer_id).await.unwrap();
        assert!(orders.is_empty());
    }
}
