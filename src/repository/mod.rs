//! Repository layer for database operations
//!
//! [`LibraryStore`] is the read-only capability the rest of the server depends
//! on. [`Repository`] implements it on top of a PostgreSQL pool and
//! [`memory::InMemoryStore`] implements it over plain vectors.

pub mod authors;
pub mod books;
pub mod customers;
pub mod memory;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    Pool, Postgres,
};
use thiserror::Error;

use crate::{
    config::DatabaseConfig,
    models::{Author, Book, Customer},
};

/// Failures reported by a [`LibraryStore`]
#[derive(Error, Debug)]
pub enum StoreError {
    /// A single-row lookup matched nothing
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The query could not be executed
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A returned row did not fit the record shape
    #[error("failed to read row: {0}")]
    Scan(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_scan = matches!(
            err,
            sqlx::Error::ColumnDecode { .. }
                | sqlx::Error::ColumnNotFound(_)
                | sqlx::Error::ColumnIndexOutOfBounds { .. }
                | sqlx::Error::Decode(_)
                | sqlx::Error::TypeNotFound { .. }
        );
        if is_scan {
            StoreError::Scan(err)
        } else {
            StoreError::Query(err)
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the library catalog.
///
/// Bulk operations never report [`StoreError::NotFound`]; no match is an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Check that the backing store answers
    async fn ping(&self) -> StoreResult<()>;

    async fn get_book(&self, isbn: i32) -> StoreResult<Book>;

    /// All books, in storage order
    async fn get_all_books(&self) -> StoreResult<Vec<Book>>;

    async fn get_author(&self, id: i32) -> StoreResult<Author>;

    async fn get_all_authors(&self) -> StoreResult<Vec<Author>>;

    /// Books written by the author, ordered by authorship sequence number
    async fn get_books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>>;

    async fn get_customer(&self, id: i32) -> StoreResult<Customer>;

    async fn get_all_customers(&self) -> StoreResult<Vec<Customer>>;

    /// Books the customer currently has on loan
    async fn get_books_borrowed_by_customer(&self, customer_id: i32) -> StoreResult<Vec<Book>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Repository {
    pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a pool for the configured database and make sure it answers
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones to come back
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl LibraryStore for Repository {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn get_book(&self, isbn: i32) -> StoreResult<Book> {
        self.books_get_by_isbn(isbn).await
    }

    async fn get_all_books(&self) -> StoreResult<Vec<Book>> {
        self.books_list().await
    }

    async fn get_author(&self, id: i32) -> StoreResult<Author> {
        self.authors_get_by_id(id).await
    }

    async fn get_all_authors(&self) -> StoreResult<Vec<Author>> {
        self.authors_list().await
    }

    async fn get_books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        self.books_list_by_author(author_id).await
    }

    async fn get_customer(&self, id: i32) -> StoreResult<Customer> {
        self.customers_get_by_id(id).await
    }

    async fn get_all_customers(&self) -> StoreResult<Vec<Customer>> {
        self.customers_list().await
    }

    async fn get_books_borrowed_by_customer(&self, customer_id: i32) -> StoreResult<Vec<Book>> {
        self.books_list_borrowed_by_customer(customer_id).await
    }
}
