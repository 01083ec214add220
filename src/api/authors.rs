//! Author endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorWithBooks, Book},
};

use super::parse_id;

/// List all authors
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>),
        (status = 500, description = "Database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Get an author with their books
#[utoipa::path(
    get,
    path = "/author/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorWithBooks),
        (status = 400, description = "Invalid author ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<AuthorWithBooks>> {
    let id = parse_id(&id, "author id")?;
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}

/// List an author's books in authorship order
#[utoipa::path(
    get,
    path = "/author/{id}/books",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Books by the author", body = Vec<Book>),
        (status = 400, description = "Invalid author ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_author_books(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Vec<Book>>> {
    let id = parse_id(&id, "author id")?;
    let books = state.services.catalog.list_author_books(id).await?;
    Ok(Json(books))
}
