//! Single-shot JSON fetching with a fallback value.
//!
//! A remote feed either yields its parsed payload or a caller-supplied
//! substitute; the failure is logged, never returned. No retries.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{AppError, NetworkError, ReqwestErrorExt};

/// Where a fetched value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchSource {
    Remote,
    /// The request failed and the fallback was substituted
    Fallback { reason: String },
}

/// A value produced by [`fetch_with_fallback`]
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub source: FetchSource,
}

impl<T> Fetched<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            source: FetchSource::Remote,
        }
    }

    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Self {
            value,
            source: FetchSource::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, FetchSource::Fallback { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Send one request and decode its JSON body.
///
/// # Errors
///
/// Transport failures, non-2xx statuses and undecodable bodies are all
/// returned as [`NetworkError`].
pub async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, NetworkError> {
    let response = request
        .send()
        .await
        .map_err(ReqwestErrorExt::into_network_error)?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(NetworkError::ServerError {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(ReqwestErrorExt::into_network_error)?;

    serde_json::from_slice(&body).map_err(|e| NetworkError::InvalidResponse(e.to_string()))
}

/// Fetch `request` as JSON, substituting `fallback()` on any failure.
pub async fn fetch_with_fallback<T, F>(label: &str, request: RequestBuilder, fallback: F) -> Fetched<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match fetch_json(request).await {
        Ok(value) => {
            tracing::debug!("Fetched {} from remote", label);
            Fetched::remote(value)
        }
        Err(e) => {
            let reason = e.to_string();
            let app_err = AppError::from(e);
            tracing::warn!(
                "Error fetching {}: {} ({}); using fallback",
                label,
                reason,
                app_err.user_message()
            );
            Fetched::fallback(fallback(), reason)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    fn fallback_payload() -> Payload {
        Payload { value: -1 }
    }

    #[tokio::test]
    async fn test_success_returns_remote_value() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 7})))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let request = client.get(format!("{}/data", mock_server.uri()));
        let fetched = fetch_with_fallback("payload", request, fallback_payload).await;

        assert_eq!(fetched.value, Payload { value: 7 });
        assert_eq!(fetched.source, FetchSource::Remote);
    }

    #[tokio::test]
    async fn test_non_success_status_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let request = client.get(format!("{}/data", mock_server.uri()));
        let fetched = fetch_with_fallback("payload", request, fallback_payload).await;

        assert_eq!(fetched.value, fallback_payload());
        assert!(fetched.is_fallback());
    }

    #[tokio::test]
    async fn test_invalid_json_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let request = client.get(format!("{}/data", mock_server.uri()));
        let fetched = fetch_with_fallback("payload", request, fallback_payload).await;

        assert!(fetched.is_fallback());
    }

    #[tokio::test]
    async fn test_fetch_json_reports_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result: Result<Payload, _> = fetch_json(client.get(mock_server.uri())).await;

        match result {
            Err(NetworkError::ServerError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "missing");
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        // Nothing listens on the discard port
        let client = reqwest::Client::new();
        let request = client.get("http://127.0.0.1:9/data");
        let fetched = fetch_with_fallback("payload", request, fallback_payload).await;

        assert!(fetched.is_fallback());
        assert_eq!(fetched.value.value, -1);
    }

    #[test]
    fn test_map_keeps_source() {
        let fetched = Fetched::fallback(2, "boom").map(|v| v * 10);
        assert_eq!(fetched.value, 20);
        assert!(fetched.is_fallback());
    }
}
