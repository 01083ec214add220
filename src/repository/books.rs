//! Book queries on Repository

use super::{Repository, StoreError, StoreResult};
use crate::models::{book::BookRow, Book};

const BOOK_COLUMNS: &str = "b.isbn, b.title, b.edition_no, b.numofcop, b.numleft";

impl Repository {
    /// Get a book by exact ISBN
    pub async fn books_get_by_isbn(&self, isbn: i32) -> StoreResult<Book> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM book b WHERE b.isbn = $1");

        sqlx::query_as::<_, BookRow>(&query)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .map(Book::from)
            .ok_or(StoreError::NotFound { entity: "Book", id: isbn })
    }

    /// List every book in storage order
    pub async fn books_list(&self) -> StoreResult<Vec<Book>> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM book b");

        let rows = sqlx::query_as::<_, BookRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// List the books of an author, first-authored position first
    pub async fn books_list_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM book b
            JOIN book_author ba ON ba.isbn = b.isbn
            WHERE ba.authorid = $1
            ORDER BY ba.authorseqno, b.isbn
            "#
        );

        let rows = sqlx::query_as::<_, BookRow>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// List the books a customer currently has on loan
    pub async fn books_list_borrowed_by_customer(&self, customer_id: i32) -> StoreResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM book b
            JOIN cust_book cb ON cb.isbn = b.isbn
            WHERE cb.customerid = $1
            ORDER BY b.isbn
            "#
        );

        let rows = sqlx::query_as::<_, BookRow>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}
