//! Configuration module

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the HTTP trigger host
    pub host_url: String,
}
