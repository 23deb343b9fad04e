//! Trigger HTTP Client
//!
//! A small, typed HTTP client for invoking the HTTP-trigger host.
//!
//! # Example
//!
//! ```no_run
//! use trigger_client::TriggerClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TriggerClient::new("http://localhost:7071");
//!
//!     let response = client.invoke("http_trigger", "GET", None).await?;
//!     println!("{} {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

pub mod error;
mod triggers;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use triggers::TriggerResponse;
pub use trigger_core::dto::trigger::TriggerSummary;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the trigger host
#[derive(Debug, Clone)]
pub struct TriggerClient {
    /// Base URL of the host (e.g., "http://localhost:7071")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl TriggerClient {
    /// Create a new trigger client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the host (e.g., "http://localhost:7071")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new trigger client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the host
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status code and return the body as text
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<(u16, String)> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), text));
        }

        Ok((status.as_u16(), text))
    }
}
