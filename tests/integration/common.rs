//! Shared fixtures for integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bookstore_server::{
    api,
    models::{author::AuthorRow, book::BookRow, customer::CustomerRow},
    repository::{memory::InMemoryStore, LibraryStore},
    AppConfig, AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn book(isbn: i32, title: &str, edition_no: Option<i32>, numofcop: i32, numleft: i32) -> BookRow {
    BookRow {
        isbn,
        title: title.to_string(),
        edition_no,
        numofcop,
        numleft,
    }
}

/// Small catalog: two authors, two customers, four books
pub fn catalog() -> InMemoryStore {
    InMemoryStore::new()
        .with_book(book(12345, "  Dune  ", Some(1), 5, 3))
        .with_book(book(23456, "Dune Messiah", None, 2, 2))
        .with_book(book(34567, "Children of Dune", Some(2), 1, 0))
        .with_book(book(45678, "The Left Hand of Darkness", Some(3), 4, 4))
        .with_author(AuthorRow {
            authorid: 1,
            surname: "Herbert".to_string(),
            name: Some("Frank".to_string()),
        })
        .with_author(AuthorRow {
            authorid: 2,
            surname: "Le Guin".to_string(),
            name: None,
        })
        .with_authorship(34567, 1, 1)
        .with_authorship(12345, 1, 3)
        .with_authorship(23456, 1, 2)
        .with_authorship(45678, 2, 1)
        .with_customer(CustomerRow {
            customerid: 10,
            l_name: "Atreides".to_string(),
            f_name: Some("Paul".to_string()),
            city: Some("Arrakeen".to_string()),
        })
        .with_customer(CustomerRow {
            customerid: 11,
            l_name: "Harkonnen".to_string(),
            f_name: None,
            city: None,
        })
        .with_loan(45678, 10)
        .with_loan(12345, 10)
}

pub fn app(store: impl LibraryStore + 'static) -> Router {
    api::router(AppState::new(AppConfig::default(), Arc::new(store)))
}

/// Issue a bodiless request and return the status, content type, and raw body
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, body.to_vec())
}

pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    request(app, Method::GET, uri).await
}

/// Issue a GET and parse the body as JSON, checking the content type
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, content_type, body) = get_raw(app, uri).await;
    assert_eq!(content_type.as_deref(), Some("application/json"), "GET {}", uri);
    (status, serde_json::from_slice(&body).unwrap())
}
