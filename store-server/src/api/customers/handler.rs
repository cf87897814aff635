//! Customer API Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::repo_error;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Customer, CustomerCreate, CustomerQuery};

/// GET /api/customers - 客户列表
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<CustomerQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.find_all(&filter).await.map_err(repo_error)?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// GET /api/customers/{id} - 客户详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let customer = state
        .customers
        .find_by_id(&id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))?;
    Ok(Json(customer.into()))
}

/// POST /api/customers - 创建客户
///
/// 邮箱全小写存储并建有唯一索引，重复时返回 409。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    payload.validate()?;

    let created = state.customers.create(payload).await.map_err(repo_error)?;
    tracing::info!("Created customer: {}", created.email);
    Ok((StatusCode::CREATED, Json(created.into())))
}
