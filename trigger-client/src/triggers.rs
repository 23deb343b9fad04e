//! Trigger-related host endpoints

use reqwest::Method;
use trigger_core::domain::http::find_trigger;
use trigger_core::dto::trigger::TriggerSummary;

use crate::TriggerClient;
use crate::error::{ClientError, Result};

/// Response from invoking an HTTP trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerResponse {
    /// HTTP status code
    pub status: u16,
    /// Plain-text response body
    pub body: String,
}

impl TriggerClient {
    /// List the triggers registered on the host
    pub async fn list_triggers(&self) -> Result<Vec<TriggerSummary>> {
        let url = format!("{}/api/triggers", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Invoke an HTTP trigger by function name
    ///
    /// # Arguments
    /// * `name` - Function name (e.g., "http_trigger")
    /// * `method` - HTTP method to send (e.g., "GET", "POST")
    /// * `body` - Optional request body; the trigger ignores it
    pub async fn invoke(
        &self,
        name: &str,
        method: &str,
        body: Option<String>,
    ) -> Result<TriggerResponse> {
        let trigger = find_trigger(name).ok_or_else(|| ClientError::UnknownTrigger(name.into()))?;
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| ClientError::InvalidRequest(format!("Invalid HTTP method: {}", method)))?;

        let url = format!("{}{}", self.base_url, trigger.route);
        tracing::debug!("Invoking {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;

        let (status, body) = self.handle_text_response(response).await?;
        Ok(TriggerResponse { status, body })
    }

    /// Check host liveness
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        let (_, body) = self.handle_text_response(response).await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigger_core::domain::http::HTTP_TRIGGERS;

    /// Serves the host router on an ephemeral local port
    async fn spawn_host() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, trigger_http::api::create_router())
                .await
                .unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_list_triggers_from_host() {
        let client = TriggerClient::new(spawn_host().await);

        let triggers = client.list_triggers().await.unwrap();

        let expected: Vec<TriggerSummary> =
            HTTP_TRIGGERS.iter().map(TriggerSummary::from).collect();
        assert_eq!(triggers, expected);
    }

    #[tokio::test]
    async fn test_invoke_returns_fixed_body() {
        let client = TriggerClient::new(spawn_host().await);

        for trigger in &HTTP_TRIGGERS {
            for method in ["GET", "post", "PUT"] {
                let response = client
                    .invoke(trigger.name, method, Some("ignored".to_string()))
                    .await
                    .unwrap();

                assert_eq!(response.status, 200);
                assert_eq!(response.body, trigger.body);
            }
        }
    }

    #[tokio::test]
    async fn test_health_from_host() {
        let client = TriggerClient::new(spawn_host().await);

        assert_eq!(client.health().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_api_error() {
        let base_url = spawn_host().await;
        let client = TriggerClient::new(format!("{}/missing", base_url));

        let err = client.list_triggers().await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
        assert!(err.is_not_found());

        let err = client.health().await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiError { status: 404, ref message } if message.contains("/missing/health")
        ));

        let err = client.invoke("http_trigger", "GET", None).await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_invoke_unknown_trigger_fails_before_sending() {
        let client = TriggerClient::new("http://127.0.0.1:9");

        let err = client.invoke("missing", "GET", None).await.unwrap_err();
        assert!(matches!(err, ClientError::UnknownTrigger(ref name) if name == "missing"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_invalid_method() {
        let client = TriggerClient::new("http://127.0.0.1:9");

        let err = client
            .invoke("http_trigger", "NOT A METHOD", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
