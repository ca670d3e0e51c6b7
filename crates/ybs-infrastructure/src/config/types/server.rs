//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}
