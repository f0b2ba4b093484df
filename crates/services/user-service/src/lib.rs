//! User Service Library
//!
//! This crate owns the user directory: an in-memory store seeded at startup
//! and the request handler that validates arguments before touching it.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::repository::{InMemoryUserStore, UserRepository};
use crate::service::{UserManager, UserService};

/// Build the user service as an embedded component of the gateway.
pub fn build_embedded(config: &UserServiceConfig) -> Arc<dyn UserService> {
    let store = if config.seed {
        InMemoryUserStore::seeded()
    } else {
        InMemoryUserStore::new()
    };
    info!(seed = config.seed, "User store initialized");

    let user_repo: Arc<dyn UserRepository> = Arc::new(store);
    Arc::new(UserManager::new(user_repo))
}
