//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::service::UserService;

use crate::config::GatewayConfig;
use crate::graphql::{build_schema, UserSchema};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub schema: UserSchema,
    pub users: Arc<dyn UserService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state, building the GraphQL schema over the user service.
    pub fn new(users: Arc<dyn UserService>, config: GatewayConfig) -> Self {
        Self {
            schema: build_schema(users.clone()),
            users,
            config,
        }
    }
}
