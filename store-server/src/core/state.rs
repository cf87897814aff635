//! Server State
//!
//! ServerState 持有数据库句柄与所有仓储，启动时构建一次，
//! 之后通过 axum State 以引用方式传入各 handler。
//! 没有模块级单例，没有全局注册表。

use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::core::Config;
use crate::db::repository::{CustomerRepository, OrderRepository, ProductRepository};
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 `Clone` 实现浅拷贝 (SurrealDB 句柄内部是 Arc)。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式数据库 |
/// | products / customers / orders | 各表仓储 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub products: ProductRepository,
    pub customers: CustomerRepository,
    pub orders: OrderRepository,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self {
            config,
            products: ProductRepository::new(db.clone()),
            customers: CustomerRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            db,
        }
    }

    /// Initialize state against the on-disk database under `work_dir`
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_service = DbService::new(&config.work_dir).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Initialize state against an in-memory database (tests)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::open_in_memory().await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
