//! Customer queries on Repository

use super::{Repository, StoreError, StoreResult};
use crate::models::{customer::CustomerRow, Customer};

impl Repository {
    /// Get a customer by ID
    pub async fn customers_get_by_id(&self, id: i32) -> StoreResult<Customer> {
        sqlx::query_as::<_, CustomerRow>(
            "SELECT customerid, l_name, f_name, city FROM customer WHERE customerid = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Customer::from)
        .ok_or(StoreError::NotFound { entity: "Customer", id })
    }

    /// List all customers
    pub async fn customers_list(&self) -> StoreResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>("SELECT customerid, l_name, f_name, city FROM customer")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
