//! Order Repository
//!
//! 订单写入与库存扣减在同一个 SurrealQL 事务中完成：
//! 任一语句失败则整体回滚，不会出现扣了库存没有订单的状态。

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;

const ORDER_TABLE: &str = "order";

/// One stock decrement inside the order transaction
#[derive(Debug, Clone, Serialize)]
pub struct StockDecrement {
    pub product: RecordId,
    pub quantity: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id);
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// List orders for one customer, newest first
    pub async fn find_by_customer(&self, customer_id: &str) -> RepoResult<Vec<Order>> {
        let customer = parse_record_id("customer", customer_id);
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE customer = $customer ORDER BY created_at DESC")
            .bind(("customer", customer))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Persist the order and apply all stock decrements atomically
    pub async fn create(&self, order: Order, decrements: Vec<StockDecrement>) -> RepoResult<Order> {
        let now = chrono::Utc::now().to_rfc3339();

        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                FOR $line IN $decrements {
                    UPDATE $line.product SET stock -= $line.quantity, updated_at = $now;
                };
                CREATE order CONTENT $order;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("decrements", decrements))
            .bind(("now", now))
            .bind(("order", order))
            .await?;

        // Statement 0 is the FOR loop, statement 1 the CREATE
        let created: Vec<Order> = result.take(1)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }
}
