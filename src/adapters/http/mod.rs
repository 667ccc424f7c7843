//! HTTP adapter - REST endpoints over the domain services.
//!
//! Each resource has its own module with DTOs, handlers and routes.
//! [`api_router`] mounts them all under `/api/v1` next to `/health`,
//! and [`with_middleware`] adds tracing, CORS and the request timeout.

pub mod account;
pub mod error;
pub mod expense;
pub mod expense_category;
pub mod expense_subcategory;
pub mod person;

use ::http::HeaderValue;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::Services;
use crate::config::ServerConfig;

pub use account::{account_routes, AccountHandlers};
pub use error::ErrorResponse;
pub use expense::{expense_routes, ExpenseHandlers};
pub use expense_category::{expense_category_routes, ExpenseCategoryHandlers};
pub use expense_subcategory::{expense_subcategory_routes, ExpenseSubCategoryHandlers};
pub use person::{person_routes, PersonHandlers};

/// Every resource route plus the health check.
pub fn api_router(services: Services) -> Router {
    let api = Router::new()
        .merge(person_routes(PersonHandlers::new(services.persons)))
        .merge(account_routes(AccountHandlers::new(services.accounts)))
        .merge(expense_routes(ExpenseHandlers::new(services.expenses)))
        .merge(expense_category_routes(ExpenseCategoryHandlers::new(
            services.categories,
        )))
        .merge(expense_subcategory_routes(ExpenseSubCategoryHandlers::new(
            services.subcategories,
        )));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
}

/// Wraps the router in request tracing, CORS and the request timeout.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
