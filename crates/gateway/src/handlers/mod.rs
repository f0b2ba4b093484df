//! HTTP handlers.

mod graphql_handler;
mod health_handler;

pub use graphql_handler::{graphiql, graphql_handler, graphql_method_fallback};
pub use health_handler::{health_check, health_routes, HealthResponse};

use common::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
