//! Server configuration.

use std::net::{AddrParseError, SocketAddr};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on (0 = pick any free port)
    pub port: u16,
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Start with the built-in seed records
    pub seed: bool,
}

impl ServerConfig {
    /// Parses `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_ms: 5000, // 5 seconds default
            seed: true,
        }
    }
}
