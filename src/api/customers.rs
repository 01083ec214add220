//! Customer endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Customer, CustomerWithBooks},
};

use super::parse_id;

/// List all customers
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 500, description = "Database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_customers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.catalog.list_customers().await?;
    Ok(Json(customers))
}

/// Get a customer with the books they hold
#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerWithBooks),
        (status = 400, description = "Invalid customer ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<CustomerWithBooks>> {
    let id = parse_id(&id, "customer id")?;
    let customer = state.services.catalog.get_customer(id).await?;
    Ok(Json(customer))
}

/// List the books a customer has borrowed
#[utoipa::path(
    get,
    path = "/customer/{id}/books",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Books on loan to the customer", body = Vec<Book>),
        (status = 400, description = "Invalid customer ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_customer_books(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Vec<Book>>> {
    let id = parse_id(&id, "customer id")?;
    let books = state.services.catalog.list_customer_books(id).await?;
    Ok(Json(books))
}
