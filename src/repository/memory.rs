//! In-memory store for tests and local demos
//!
//! Holds raw rows exactly as the database would return them and maps them
//! through the same conversions as [`super::Repository`].

use async_trait::async_trait;

use super::{LibraryStore, StoreError, StoreResult};
use crate::models::{
    author::AuthorRow, book::BookRow, customer::CustomerRow, Author, Book, Customer,
};

#[derive(Debug, Clone, Copy)]
struct Authorship {
    isbn: i32,
    author_id: i32,
    seq_no: i32,
}

#[derive(Debug, Clone, Copy)]
struct Loan {
    isbn: i32,
    customer_id: i32,
}

/// Store backed by plain vectors, built once and then only read
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    books: Vec<BookRow>,
    authors: Vec<AuthorRow>,
    customers: Vec<CustomerRow>,
    authorships: Vec<Authorship>,
    loans: Vec<Loan>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, row: BookRow) -> Self {
        self.books.push(row);
        self
    }

    pub fn with_author(mut self, row: AuthorRow) -> Self {
        self.authors.push(row);
        self
    }

    pub fn with_customer(mut self, row: CustomerRow) -> Self {
        self.customers.push(row);
        self
    }

    /// Link a book to an author at the given authorship position
    pub fn with_authorship(mut self, isbn: i32, author_id: i32, seq_no: i32) -> Self {
        self.authorships.push(Authorship { isbn, author_id, seq_no });
        self
    }

    /// Record that a customer currently has a book on loan
    pub fn with_loan(mut self, isbn: i32, customer_id: i32) -> Self {
        self.loans.push(Loan { isbn, customer_id });
        self
    }

    /// Make every operation fail as if the database were unreachable
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing {
            return Err(StoreError::Query(sqlx::Error::Protocol(
                "in-memory store is in failing mode".to_string(),
            )));
        }
        Ok(())
    }

    fn book_row(&self, isbn: i32) -> Option<&BookRow> {
        self.books.iter().find(|row| row.isbn == isbn)
    }
}

#[async_trait]
impl LibraryStore for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }

    async fn get_book(&self, isbn: i32) -> StoreResult<Book> {
        self.check()?;
        self.book_row(isbn)
            .cloned()
            .map(Book::from)
            .ok_or(StoreError::NotFound { entity: "Book", id: isbn })
    }

    async fn get_all_books(&self) -> StoreResult<Vec<Book>> {
        self.check()?;
        Ok(self.books.iter().cloned().map(Book::from).collect())
    }

    async fn get_author(&self, id: i32) -> StoreResult<Author> {
        self.check()?;
        self.authors
            .iter()
            .find(|row| row.authorid == id)
            .cloned()
            .map(Author::from)
            .ok_or(StoreError::NotFound { entity: "Author", id })
    }

    async fn get_all_authors(&self) -> StoreResult<Vec<Author>> {
        self.check()?;
        Ok(self.authors.iter().cloned().map(Author::from).collect())
    }

    async fn get_books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        self.check()?;
        let mut links: Vec<&Authorship> = self
            .authorships
            .iter()
            .filter(|link| link.author_id == author_id)
            .collect();
        links.sort_by_key(|link| (link.seq_no, link.isbn));

        Ok(links
            .into_iter()
            .filter_map(|link| self.book_row(link.isbn))
            .cloned()
            .map(Book::from)
            .collect())
    }

    async fn get_customer(&self, id: i32) -> StoreResult<Customer> {
        self.check()?;
        self.customers
            .iter()
            .find(|row| row.customerid == id)
            .cloned()
            .map(Customer::from)
            .ok_or(StoreError::NotFound { entity: "Customer", id })
    }

    async fn get_all_customers(&self) -> StoreResult<Vec<Customer>> {
        self.check()?;
        Ok(self.customers.iter().cloned().map(Customer::from).collect())
    }

    async fn get_books_borrowed_by_customer(&self, customer_id: i32) -> StoreResult<Vec<Book>> {
        self.check()?;
        let mut isbns: Vec<i32> = self
            .loans
            .iter()
            .filter(|loan| loan.customer_id == customer_id)
            .map(|loan| loan.isbn)
            .collect();
        isbns.sort_unstable();

        Ok(isbns
            .into_iter()
            .filter_map(|isbn| self.book_row(isbn))
            .cloned()
            .map(Book::from)
            .collect())
    }
}
