//! # HTTP Client
//!
//! Thin reqwest wrapper used by the remote content source.
//!
//! Provides a configured timeout, JSON decoding and mapping of transport
//! and status failures onto [`ContentError`].

use crate::infrastructure::content::error::{ContentError, ContentResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ContentResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ContentError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Timeout` or `ContentError::Connection` if the
    /// request fails, a status-specific error for non-2xx responses, and
    /// `ContentError::Protocol` if the body cannot be decoded as `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ContentResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(url, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: Response,
    ) -> ContentResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ContentError::protocol(format!("Failed to parse response from {}: {}", url, e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(map_status_error(url, status, &error_body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> ContentError {
        if error.is_timeout() {
            ContentError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            ContentError::connection(format!("Connection failed: {}", error))
        } else {
            ContentError::connection(format!("HTTP request failed: {}", error))
        }
    }
}

fn map_status_error(url: &str, status: StatusCode, body: &str) -> ContentError {
    match status {
        StatusCode::NOT_FOUND => ContentError::not_found(format!("GET {}: {}", url, body)),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ContentError::timeout(format!("Server timeout ({}): {}", status, body))
        }
        s if s.is_server_error() => {
            ContentError::connection(format!("Server error ({}): {}", status, body))
        }
        _ => ContentError::protocol(format!("HTTP error ({}): {}", status, body)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn status_mapping() {
        let url = "http://content/faqs";
        assert!(matches!(
            map_status_error(url, StatusCode::NOT_FOUND, ""),
            ContentError::NotFound { .. }
        ));
        assert!(matches!(
            map_status_error(url, StatusCode::GATEWAY_TIMEOUT, ""),
            ContentError::Timeout { .. }
        ));
        assert!(map_status_error(url, StatusCode::SERVICE_UNAVAILABLE, "").is_retryable());
        assert!(matches!(
            map_status_error(url, StatusCode::BAD_REQUEST, "nope"),
            ContentError::Protocol { .. }
        ));
    }
}
