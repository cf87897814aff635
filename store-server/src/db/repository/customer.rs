//! Customer Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::Customer;
use shared::models::{CustomerCreate, CustomerQuery};
use shared::CustomerRegion;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const CUSTOMER_TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find customers, optionally filtered by region
    pub async fn find_all(&self, filter: &CustomerQuery) -> RepoResult<Vec<Customer>> {
        let customers: Vec<Customer> = match filter.region {
            Some(region) => {
                self.base
                    .db()
                    .query("SELECT * FROM customer WHERE region = $region ORDER BY created_at")
                    .bind(("region", region))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM customer ORDER BY created_at")
                    .await?
                    .take(0)?
            }
        };
        Ok(customers)
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let record_id = parse_record_id(CUSTOMER_TABLE, id);
        let customer: Option<Customer> = self.base.db().select(record_id).await?;
        Ok(customer)
    }

    /// Find customer by email (stored lowercased)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let customers: Vec<Customer> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    /// Create a new customer
    pub async fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        // Check duplicate email (unique index is the backstop)
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Customer with email '{}' already exists",
                data.email.to_lowercase()
            )));
        }

        let customer = Customer {
            id: None,
            name: data.name,
            email: data.email.to_lowercase(),
            region: data.region.unwrap_or(CustomerRegion::Us),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };

        let created: Option<Customer> = self
            .base
            .db()
            .create(CUSTOMER_TABLE)
            .content(customer)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }
}
