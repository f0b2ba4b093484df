//! Route configuration.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::GatewayConfig;
use crate::handlers::{
    graphiql, graphql_handler, graphql_method_fallback, health_routes, not_found,
};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let graphql_route = if state.config.graphiql_enabled {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    }
    .fallback(graphql_method_fallback);

    Router::new()
        // Health check
        .nest("/health", health_routes())
        // GraphQL endpoint (+ explorer on GET)
        .route("/graphql", graphql_route)
        .fallback(not_found)
        .with_state(state)
}

/// CORS layer for browser clients.
pub fn cors_layer(config: &GatewayConfig) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origin = match &config.cors_allowed_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
