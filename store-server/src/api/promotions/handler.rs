//! Promotion API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use crate::pricing::{promotional_info, region_pricing_info, PromotionalInfo, RegionPricingInfo};
use crate::utils::{AppError, AppResult};
use shared::CustomerRegion;

/// 促销查询参数
#[derive(Debug, Deserialize)]
pub struct PromotionsQuery {
    /// ISO 日期 (YYYY-MM-DD)，缺省为服务器本地日期
    pub date: Option<NaiveDate>,
}

/// GET /api/promotions - 指定日期的促销信息
pub async fn promotions(
    State(_state): State<ServerState>,
    Query(query): Query<PromotionsQuery>,
) -> Json<PromotionalInfo> {
    let date = query
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    Json(promotional_info(date))
}

/// GET /api/regions/{region}/pricing - 区域定价说明
///
/// 区域名大小写敏感 (US / EUROPE / ASIA)，未知区域返回 400。
pub async fn region_pricing(
    State(_state): State<ServerState>,
    Path(region): Path<String>,
) -> AppResult<Json<RegionPricingInfo>> {
    let region: CustomerRegion = region
        .parse()
        .map_err(|e: shared::types::UnknownRegion| AppError::validation(e.to_string()))?;
    Ok(Json(region_pricing_info(region)))
}
