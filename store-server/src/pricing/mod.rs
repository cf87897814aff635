//! Pricing Engine Module
//!
//! 订单定价引擎：纯函数，无 I/O，无共享状态。
//!
//! 计算流程：小计 → 候选折扣 (量级 / 黑色星期五 / 节日) → 取最高
//! 百分比 → 折后金额 → 区域调整 → 输出统一保留两位小数。
//!
//! 日期永远由调用方显式传入，"默认今天" 属于调用点的职责，
//! 引擎本身不读系统时钟。

mod calendar;
mod engine;
mod region;

#[cfg(test)]
mod tests;

pub use calendar::{black_friday, holiday_name, is_black_friday, is_holiday};
pub use engine::{
    compute_pricing, promotional_info, DiscountInfo, DiscountType, OrderItem, PricingResult,
    PromotionalInfo,
};
pub use region::{region_adjustment_percentage, region_pricing_info, RegionPricingInfo};
