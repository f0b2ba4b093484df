//! Gateway configuration.

use common::{env_flag, env_parse, env_var};

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Serve the GraphiQL explorer on `GET /graphql`
    pub graphiql_enabled: bool,
    /// Single allowed CORS origin; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env_var(&["GATEWAY_HOST", "HOST"]).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env_parse(&["GATEWAY_PORT", "PORT"], 4000),
            graphiql_enabled: env_flag(&["GRAPHIQL_ENABLED"], true),
            cors_allowed_origin: env_var(&["CORS_ALLOWED_ORIGIN"])
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    /// Socket address string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            graphiql_enabled: true,
            cors_allowed_origin: None,
        }
    }
}
