//! HTTP client abstraction for testability

use std::future::Future;
use std::time::Duration;

use super::types::ProviderError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default User-Agent. Public geocoding services reject anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("routesheet/", env!("CARGO_PKG_VERSION"));

/// Trait for async HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes, or an error. Non-success statuses are
    /// reported as [`ProviderError::HttpStatus`] carrying the body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client with the default timeout and User-Agent.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_settings(DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }

    /// Creates a new client with a custom timeout and User-Agent.
    pub fn with_settings(timeout_secs: u64, user_agent: &str) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send {
        let client = self.client.clone();
        let url = url.to_string();

        async move {
            let response = client.get(&url).send().await.map_err(classify)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                tracing::debug!(status = status.as_u16(), url = %url, "Non-success HTTP status");
                return Err(ProviderError::HttpStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            response.bytes().await.map(|b| b.to_vec()).map_err(classify)
        }
    }
}

/// Maps a reqwest error onto the provider taxonomy, keeping timeouts distinct.
fn classify(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(error.to_string())
    } else {
        ProviderError::HttpError(format!("Request failed: {}", error))
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// Mock HTTP client returning a canned response and recording URLs.
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requests: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockAsyncHttpClient {
        pub fn ok(body: &str) -> Self {
            Self::with_response(Ok(body.as_bytes().to_vec()))
        }

        pub fn with_response(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_url(&self) -> Option<String> {
            self.requests.lock().last().cloned()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().push(url.to_string());
            let response = self.response.clone();
            async move { response }
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockAsyncHttpClient::ok("[]");

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), b"[]".to_vec());
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_url().as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockAsyncHttpClient::with_response(Err(ProviderError::Timeout(
            "deadline".to_string(),
        )));

        let result = mock.get("http://example.com").await;
        assert!(matches!(result, Err(ProviderError::Timeout(_))));
    }

    #[test]
    fn test_default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("routesheet/"));
    }
}
