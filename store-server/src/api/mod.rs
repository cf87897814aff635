//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口
//! - [`customers`] - 客户管理接口
//! - [`orders`] - 订单创建与查询接口
//! - [`promotions`] - 促销日历与区域定价接口

pub mod convert;

pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod promotions;

use crate::db::repository::RepoError;
use crate::utils::AppError;

/// Map repository errors onto API errors
pub(crate) fn repo_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::NotFound(msg),
        RepoError::Duplicate(msg) => AppError::Conflict(msg),
        RepoError::Validation(msg) => AppError::Validation(msg),
        RepoError::Database(msg) => AppError::Database(msg),
    }
}
