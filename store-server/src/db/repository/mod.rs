//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod customer;
pub mod order;
pub mod product;

// Re-exports
pub use customer::CustomerRepository;
pub use order::{OrderRepository, StockDecrement};
pub use product::ProductRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// API 层的 ID 是完整的 "table:id" 字符串；仓储层用 RecordId 处理：
//   - 解析: let id: RecordId = "product:abc".parse()?;
//   - 创建: RecordId::from_table_key("product", "abc")
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Parse an API-supplied id into a RecordId for the given table
///
/// Accepts both "table:key" and bare "key" forms.
pub(crate) fn parse_record_id(table: &str, id: &str) -> RecordId {
    match id.parse::<RecordId>() {
        Ok(rid) if rid.table() == table => rid,
        _ => RecordId::from_table_key(table, id),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
