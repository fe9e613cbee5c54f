//! Repository for the `customers` table.

use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};

const COLUMNS: &str = "id, name, registered_at, postal_code, phone";

/// Provides customer listing and registration.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, postal_code, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.postal_code)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// List all customers ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id ASC");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }
}
