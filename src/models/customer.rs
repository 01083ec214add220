//! Customer model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// Library customer (borrower)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: i32,
    pub lastname: String,
    pub firstname: Option<String>,
    pub city: Option<String>,
}

/// Raw `customer` table row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRow {
    pub customerid: i32,
    pub l_name: String,
    pub f_name: Option<String>,
    pub city: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.customerid,
            lastname: row.l_name,
            firstname: row.f_name,
            city: row.city,
        }
    }
}

/// Customer together with the books they currently hold
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerWithBooks {
    #[serde(flatten)]
    pub customer: Customer,
    pub books: Vec<Book>,
}
