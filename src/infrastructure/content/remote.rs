//! # Remote Content Source
//!
//! [`ContentSource`] backed by the site's data service over HTTP.
//!
//! Each record kind is fetched from `{base_url}/{kind.path()}`, which must
//! answer with a JSON array.

use crate::domain::value_objects::record_kind::RecordKind;
use crate::infrastructure::content::error::ContentResult;
use crate::infrastructure::content::http_client::HttpClient;
use crate::infrastructure::content::traits::ContentSource;
use async_trait::async_trait;
use serde_json::Value;

/// Content source reading from the remote data service.
#[derive(Debug, Clone)]
pub struct RemoteContentSource {
    client: HttpClient,
    base_url: String,
}

impl RemoteContentSource {
    /// Creates a source for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Internal` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ContentResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: HttpClient::new(timeout_ms)?,
            base_url,
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the list for `kind`.
    #[must_use]
    pub fn url_for(&self, kind: RecordKind) -> String {
        format!("{}/{}", self.base_url, kind.path())
    }
}

#[async_trait]
impl ContentSource for RemoteContentSource {
    async fn fetch(&self, kind: RecordKind) -> ContentResult<Vec<Value>> {
        let url = self.url_for(kind);
        tracing::debug!(%url, %kind, "fetching content list");
        let records: Vec<Value> = self.client.get(&url).await?;
        tracing::debug!(%kind, count = records.len(), "content list received");
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::content::error::ContentError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn strips_trailing_slash() {
        let source = RemoteContentSource::new("http://content.local/api/", 1000).unwrap();
        assert_eq!(source.base_url(), "http://content.local/api");
        assert_eq!(
            source.url_for(RecordKind::ProcessStep),
            "http://content.local/api/process"
        );
    }

    #[tokio::test]
    async fn fetches_json_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/faqs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"question": "Warranty?", "answer": "5 years"},
                {"question": "Warranty?", "answer": "5 years"}
            ])))
            .mount(&server)
            .await;

        let source = RemoteContentSource::new(format!("{}/api", server.uri()), 1000).unwrap();
        let raw = source.fetch(RecordKind::Faq).await.unwrap();
        assert_eq!(raw.len(), 2);
    }

    #[tokio::test]
    async fn non_array_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let source = RemoteContentSource::new(server.uri(), 1000).unwrap();
        let err = source.fetch(RecordKind::Service).await.unwrap_err();
        assert!(matches!(err, ContentError::Protocol { .. }));
    }

    #[tokio::test]
    async fn server_error_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portfolio"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let source = RemoteContentSource::new(server.uri(), 1000).unwrap();
        let err = source.fetch(RecordKind::Portfolio).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn missing_list_is_not_found() {
        let server = MockServer::start().await;
        let source = RemoteContentSource::new(server.uri(), 1000).unwrap();
        let err = source.fetch(RecordKind::Testimonial).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/faqs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let source = RemoteContentSource::new(server.uri(), 50).unwrap();
        let err = source.fetch(RecordKind::Faq).await.unwrap_err();
        assert!(matches!(err, ContentError::Timeout { .. }));
    }
}
