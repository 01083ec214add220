//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod books;
pub mod customers;
pub mod health;
pub mod openapi;

use std::{any::Any, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    handler::Handler,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let request_timeout = state.config.server.request_timeout();

    let routes = Router::new()
        .route("/", get_only(health::index))
        .route("/health", get_only(health::health_check))
        .route("/ready", get_only(health::readiness_check))
        // Books
        .route("/book", get_only(books::list_books))
        .route("/book/:isbn", get_only(books::get_book))
        // Authors
        .route("/author", get_only(authors::list_authors))
        .route("/author/:id", get_only(authors::get_author))
        .route("/author/:id/books", get_only(authors::list_author_books))
        // Customers
        .route("/customer", get_only(customers::list_customers))
        .route("/customer/:id", get_only(customers::get_customer))
        .route("/customer/:id/books", get_only(customers::list_customer_books))
        .fallback(not_found)
        .with_state(state);

    let app = Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router());

    apply_layers(app, request_timeout)
}

/// Wrap `app` in the panic catcher, request timeout, trace and CORS layers
fn apply_layers(app: Router, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET])
        .allow_headers(AnyOrigin);

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    middleware_error(err, request_timeout)
                }))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// A GET route whose other methods answer with a JSON 405
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(method_not_allowed)
}

/// Parse a numeric path identifier, rejecting anything that is not an `i32`
pub(crate) fn parse_id(raw: &str, what: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidInput(format!("invalid {} value: {:?}", what, raw)))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

fn middleware_error(err: BoxError, request_timeout: Duration) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout(request_timeout)
    } else {
        AppError::Internal(format!("middleware failure: {}", err))
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
