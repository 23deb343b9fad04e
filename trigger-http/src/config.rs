//! Host configuration
//!
//! The host only needs to know where to listen.

use std::net::SocketAddr;

/// Environment variable overriding the bind address
pub const BIND_ADDR_VAR: &str = "TRIGGER_HTTP_BIND_ADDR";

/// Default bind address, the conventional local functions host port
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7071";

/// HTTP host configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the listener to (e.g., "0.0.0.0:7071")
    pub bind_addr: String,
}

impl Config {
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TRIGGER_HTTP_BIND_ADDR (optional, default: 0.0.0.0:7071)
    pub fn from_env() -> Self {
        std::env::var(BIND_ADDR_VAR)
            .ok()
            .filter(|addr| !addr.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("bind_addr '{}' is invalid: {}", self.bind_addr, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:7071");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.bind_addr = String::new();
        assert!(config.validate().is_err());

        config.bind_addr = "localhost".to_string();
        assert!(config.validate().is_err());

        config.bind_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());
    }
}
