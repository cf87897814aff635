//! Database Module
//!
//! 嵌入式 SurrealDB 存储：RocksDb 引擎用于正式运行，Mem 引擎用于测试。

pub mod models;
pub mod repository;

use std::path::PathBuf;

use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

use crate::utils::AppError;

/// Namespace and database name for the embedded datastore
const DB_NAMESPACE: &str = "store";
const DB_NAME: &str = "store";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the embedded database under `work_dir/store.db`
    pub async fn new(work_dir: &str) -> Result<Self, AppError> {
        let db_path = PathBuf::from(work_dir).join("store.db");

        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.clone())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(DB_NAMESPACE)
            .use_db(DB_NAME)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!("Database ready at {}", db_path.display());
        Ok(Self { db })
    }

    /// Open an in-memory database (tests and local experiments)
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        db.use_ns(DB_NAMESPACE)
            .use_db(DB_NAME)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;
        Ok(Self { db })
    }
}

/// Boot-time schema definitions
///
/// Tables are schemaless; only constraints that must hold across all
/// writers are defined here.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    // Customer emails are unique (duplicate registration is a 409)
    db.query("DEFINE INDEX IF NOT EXISTS idx_customer_email ON TABLE customer COLUMNS email UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
