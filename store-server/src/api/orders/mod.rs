//! Order API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | POST | 创建订单 (定价 + 原子扣库存) |
//! | /api/orders/{id} | GET | 订单详情 |
//! | /api/orders/by-customer/{id} | GET | 按客户列订单 |

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/by-customer/{customer_id}", get(handler::list_by_customer))
}
