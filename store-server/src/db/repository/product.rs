//! Product Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::Product;
use shared::models::{ProductCreate, ProductQuery};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find products matching the optional category / price filters
    pub async fn find_all(&self, filter: &ProductQuery) -> RepoResult<Vec<Product>> {
        let mut clauses: Vec<&str> = Vec::new();
        if filter.category.is_some() {
            clauses.push("category = $category");
        }
        if filter.min_price.is_some() {
            clauses.push("price >= $min_price");
        }
        if filter.max_price.is_some() {
            clauses.push("price <= $max_price");
        }

        let mut sql = String::from("SELECT * FROM product");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at");

        let mut query = self.base.db().query(sql);
        if let Some(category) = filter.category.clone() {
            query = query.bind(("category", category));
        }
        if let Some(min_price) = filter.min_price {
            query = query.bind(("min_price", min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.bind(("max_price", max_price));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record_id = parse_record_id(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let now = chrono::Utc::now().to_rfc3339();
        let product = Product {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            category: data.category,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Adjust stock by a signed delta and return the updated product
    ///
    /// The caller is responsible for rejecting deltas that would drive
    /// stock negative; this is a plain atomic increment.
    pub async fn adjust_stock(&self, id: &str, delta: i64) -> RepoResult<Product> {
        let record_id = parse_record_id(PRODUCT_TABLE, id);
        let now = chrono::Utc::now().to_rfc3339();

        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET stock += $delta, updated_at = $now RETURN AFTER")
            .bind(("id", record_id))
            .bind(("delta", delta))
            .bind(("now", now))
            .await?;

        let updated: Vec<Product> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }
}
