//! Product API Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::repo_error;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Product, ProductCreate, ProductQuery, RestockRequest, SellRequest, StockChange};

/// GET /api/products - 商品列表
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.find_all(&filter).await.map_err(repo_error)?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/{id} - 商品详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .products
        .find_by_id(&id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product.into()))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    payload.validate()?;

    let created = state.products.create(payload).await.map_err(repo_error)?;
    tracing::info!("Created product: {}", created.name);
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// POST /api/products/{id}/restock - 入库补货
pub async fn restock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RestockRequest>,
) -> AppResult<Json<StockChange>> {
    payload.validate()?;

    let before = state
        .products
        .find_by_id(&id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;

    let after = state
        .products
        .adjust_stock(&id, payload.quantity)
        .await
        .map_err(repo_error)?;

    Ok(Json(StockChange {
        id,
        name: after.name,
        previous_stock: before.stock,
        quantity: payload.quantity,
        new_stock: after.stock,
    }))
}

/// POST /api/products/{id}/sell - 直接售出
///
/// 不经过订单定价，仅扣减库存。库存不足时返回 422。
pub async fn sell(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SellRequest>,
) -> AppResult<Json<StockChange>> {
    payload.validate()?;

    let before = state
        .products
        .find_by_id(&id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;

    if before.stock < payload.quantity {
        return Err(AppError::business_rule(format!(
            "Insufficient stock for product \"{}\". Available: {}, Requested: {}",
            before.name, before.stock, payload.quantity
        )));
    }

    let after = state
        .products
        .adjust_stock(&id, -payload.quantity)
        .await
        .map_err(repo_error)?;

    Ok(Json(StockChange {
        id,
        name: after.name,
        previous_stock: before.stock,
        quantity: -payload.quantity,
        new_stock: after.stock,
    }))
}
