//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::parse_id;

/// List every book
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    responses(
        (status = 200, description = "All books, possibly empty", body = Vec<Book>),
        (status = 500, description = "Database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    tracing::debug!(count = books.len(), "Listed books");
    Ok(Json(books))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/book/{isbn}",
    tag = "books",
    params(
        ("isbn" = i32, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "ISBN is not an integer", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(isbn), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Book>> {
    let isbn = parse_id(&isbn, "isbn")?;
    let book = state.services.catalog.get_book(isbn).await?;
    Ok(Json(book))
}
