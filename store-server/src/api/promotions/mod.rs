//! Promotion API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/promotions | GET | 指定日期 (默认今天) 的促销信息 |
//! | /api/regions/{region}/pricing | GET | 区域定价说明 |

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/promotions", get(handler::promotions))
        .route("/api/regions/{region}/pricing", get(handler::region_pricing))
}
