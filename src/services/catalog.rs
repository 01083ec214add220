//! Catalog read service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorWithBooks, Book, Customer, CustomerWithBooks},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn LibraryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await.map_err(AppError::Unavailable)
    }

    pub async fn get_book(&self, isbn: i32) -> AppResult<Book> {
        Ok(self.store.get_book(isbn).await?)
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.store.get_all_books().await?)
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        Ok(self.store.get_all_authors().await?)
    }

    /// Get an author along with their books in authorship order
    pub async fn get_author(&self, id: i32) -> AppResult<AuthorWithBooks> {
        let author = self.store.get_author(id).await?;
        let books = self.store.get_books_by_author(id).await?;
        Ok(AuthorWithBooks { author, books })
    }

    /// Books of an existing author; an unknown author is an error, not an empty list
    pub async fn list_author_books(&self, id: i32) -> AppResult<Vec<Book>> {
        self.store.get_author(id).await?;
        Ok(self.store.get_books_by_author(id).await?)
    }

    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.store.get_all_customers().await?)
    }

    /// Get a customer along with the books they hold
    pub async fn get_customer(&self, id: i32) -> AppResult<CustomerWithBooks> {
        let customer = self.store.get_customer(id).await?;
        let books = self.store.get_books_borrowed_by_customer(id).await?;
        Ok(CustomerWithBooks { customer, books })
    }

    pub async fn list_customer_books(&self, id: i32) -> AppResult<Vec<Book>> {
        self.store.get_customer(id).await?;
        Ok(self.store.get_books_borrowed_by_customer(id).await?)
    }
}
