//! User service configuration.

use common::env_flag;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Load the built-in seed records at startup
    pub seed: bool,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed: env_flag(&["USER_SERVICE_SEED", "USER_STORE_SEED"], true),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}
