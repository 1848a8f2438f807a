//! HTTP server configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Server configuration
///
/// # Environment Variables
/// - `SERVER_HOST`: interface to bind (default: "0.0.0.0")
/// - `SERVER_PORT`: port to listen on (default: 3000)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .add_source(Environment::with_prefix("SERVER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
