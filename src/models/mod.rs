//! Data models for the catalog

pub mod author;
pub mod book;
pub mod customer;

// Re-export commonly used types
pub use author::{Author, AuthorWithBooks};
pub use book::Book;
pub use customer::{Customer, CustomerWithBooks};
