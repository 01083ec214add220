//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, customers, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Read-only library catalog REST API"
    ),
    paths(
        // Health
        health::index,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::list_author_books,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::list_customer_books,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::author::Author,
            crate::models::author::AuthorWithBooks,
            crate::models::customer::Customer,
            crate::models::customer::CustomerWithBooks,
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::error::ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book lookup"),
        (name = "authors", description = "Author lookup"),
        (name = "customers", description = "Customer lookup")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
