//! Storefront Server - 轻量电商后端
//!
//! # 架构概述
//!
//! 本模块是 Store Server 的主入口，提供以下核心功能：
//!
//! - **定价引擎** (`pricing`): 订单折扣选择与区域价格调整
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! ├── pricing/       # 定价引擎 (纯函数)
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use pricing::{
    compute_pricing, promotional_info, region_pricing_info, DiscountInfo, DiscountType,
    OrderItem, PricingResult, PromotionalInfo, RegionPricingInfo,
};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
