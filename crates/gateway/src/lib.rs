//! API Gateway Library
//!
//! This crate serves the user directory over GraphQL with the user service
//! embedded in-process.

pub mod config;
pub mod graphql;
pub mod handlers;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use user_service_lib::config::UserServiceConfig;

use crate::config::GatewayConfig;
use crate::routes::{cors_layer, create_router};
use crate::state::AppState;

/// Build the full application: router, CORS and request tracing.
pub fn build_app(
    config: GatewayConfig,
    user_config: &UserServiceConfig,
) -> Result<Router, Box<dyn std::error::Error>> {
    let users = user_service_lib::build_embedded(user_config);
    let cors = cors_layer(&config)?;
    let state = AppState::new(users, config);

    Ok(create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    config: GatewayConfig,
    user_config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Build address
    let addr: SocketAddr = config.bind_address().parse()?;
    let app = build_app(config, &user_config)?;

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server Running at: http://{}/graphql", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
