//! Integration tests

mod common;
mod postgres_tests;
