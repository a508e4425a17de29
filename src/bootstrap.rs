//! # Bootstrap
//!
//! Wires adapters and services from an [`AppConfig`].

use crate::api::rest::AppState;
use crate::application::services::{CatalogService, ContactService, QuoteService};
use crate::infrastructure::contact::{ContactSink, TracingContactSink};
use crate::infrastructure::content::{ContentSource, InMemoryContentSource, RemoteContentSource};
use crate::settings::{AppConfig, ContentSourceKind};
use anyhow::Context;
use std::sync::Arc;

/// Builds the content source selected by `config`.
///
/// # Errors
///
/// Fails if the remote source has no base URL or its HTTP client cannot be
/// built.
pub fn build_content_source(config: &AppConfig) -> anyhow::Result<Arc<dyn ContentSource>> {
    match config.content.source {
        ContentSourceKind::Seeded => Ok(Arc::new(InMemoryContentSource::seeded())),
        ContentSourceKind::Remote => {
            let base_url = config
                .content
                .base_url
                .as_deref()
                .context("content.base_url is required for the remote source")?;
            let source = RemoteContentSource::new(base_url, config.content.timeout_ms)
                .context("failed to build remote content source")?;
            Ok(Arc::new(source))
        }
    }
}

/// Builds the shared handler state with the logging contact sink.
///
/// # Errors
///
/// See [`build_content_source`].
pub fn build_state(config: &AppConfig) -> anyhow::Result<Arc<AppState>> {
    let source = build_content_source(config)?;
    let sink: Arc<dyn ContactSink> = Arc::new(TracingContactSink::new());
    Ok(state_with(config, source, sink))
}

/// Builds handler state over explicit adapters.
#[must_use]
pub fn state_with(
    config: &AppConfig,
    source: Arc<dyn ContentSource>,
    sink: Arc<dyn ContactSink>,
) -> Arc<AppState> {
    let catalog = CatalogService::new(source);
    tracing::info!(
        content_source = catalog.source_name(),
        discount_steps = config.pricing.discounts().steps().len(),
        "application state built"
    );
    Arc::new(AppState {
        quotes: QuoteService::new(config.pricing.clone()),
        catalog,
        contacts: ContactService::new(sink),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn seeded_by_default() {
        let source = build_content_source(&AppConfig::default()).unwrap();
        assert_eq!(source.name(), "in-memory");
    }

    #[test]
    fn remote_when_configured() {
        let config = AppConfig::from_toml_str(
            "[content]\nsource = \"remote\"\nbase_url = \"http://localhost:9/api\"\n",
        )
        .unwrap();
        let source = build_content_source(&config).unwrap();
        assert_eq!(source.name(), "remote");
    }

    #[test]
    fn state_reads_from_the_given_source() {
        let config = AppConfig::default();
        let source: Arc<dyn ContentSource> = Arc::new(InMemoryContentSource::new());
        let sink: Arc<dyn ContactSink> = Arc::new(TracingContactSink::new());
        let state = state_with(&config, source, sink);
        assert_eq!(state.catalog.source_name(), "in-memory");
    }

    #[test]
    fn remote_without_url_fails() {
        let mut config = AppConfig::default();
        config.content.source = ContentSourceKind::Remote;
        assert!(build_content_source(&config).is_err());
    }
}
