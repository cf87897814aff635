//! Product API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/products | GET | 商品列表 (支持分类 / 价格区间过滤) |
//! | /api/products | POST | 创建商品 |
//! | /api/products/{id} | GET | 商品详情 |
//! | /api/products/{id}/restock | POST | 入库补货 |
//! | /api/products/{id}/sell | POST | 直接售出 (不走订单) |

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/restock", post(handler::restock))
        .route("/{id}/sell", post(handler::sell))
}
