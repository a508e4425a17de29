//! # Catalog Service
//!
//! Serves the site's display lists.
//!
//! Every list goes through the same steps: fetch the raw list from the
//! [`ContentSource`], decode each record as the requested kind, drop
//! records marked hidden, drop repeated natural keys, then stably sort by
//! display position. Records that fail to decode are skipped so one bad row
//! cannot take down a page.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Faq, PortfolioItem, ProcessStep, Record, Service, Testimonial};
use crate::domain::services::{distinct_categories, filter_by_category, normalize_records};
use crate::domain::value_objects::CategoryFilter;
use crate::infrastructure::content::ContentSource;
use serde_json::Value;
use std::sync::Arc;

/// Reads, decodes and deduplicates record lists.
#[derive(Debug, Clone)]
pub struct CatalogService {
    source: Arc<dyn ContentSource>,
}

impl CatalogService {
    /// Creates a service reading from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Name of the backing content source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetches and normalizes the full list of `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Content`](crate::application::error::ApplicationError::Content)
    /// if the content source fails.
    pub async fn list<R: Record>(&self) -> ApplicationResult<Vec<R>> {
        let raw = self.source.fetch(R::KIND).await.map_err(|e| {
            tracing::warn!(kind = %R::KIND, source = self.source.name(), error = %e, "content fetch failed");
            e
        })?;

        let fetched = raw.len();
        let decoded = decode::<R>(raw);
        let skipped = fetched - decoded.len();
        let published: Vec<R> = decoded
            .into_iter()
            .filter(|record| record.is_published())
            .collect();
        let hidden = fetched - skipped - published.len();
        let candidates = published.len();
        let mut records = normalize_records(published);
        records.sort_by_key(|record| record.position());
        let dropped = candidates - records.len();

        if dropped > 0 {
            tracing::debug!(kind = %R::KIND, dropped, "dropped duplicate records");
        }
        tracing::debug!(
            kind = %R::KIND,
            fetched,
            skipped,
            hidden,
            served = records.len(),
            "list served"
        );

        Ok(records)
    }

    /// Portfolio items matching `filter`, deduplicated.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn portfolio(&self, filter: &CategoryFilter) -> ApplicationResult<Vec<PortfolioItem>> {
        let items = self.list::<PortfolioItem>().await?;
        if filter.is_all() {
            return Ok(items);
        }
        Ok(filter_by_category(&items, filter))
    }

    /// Distinct portfolio categories in first-seen order.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn portfolio_categories(&self) -> ApplicationResult<Vec<String>> {
        let items = self.list::<PortfolioItem>().await?;
        Ok(distinct_categories(&items))
    }

    /// Offered services.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn services(&self) -> ApplicationResult<Vec<Service>> {
        self.list().await
    }

    /// Work process steps.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn process_steps(&self) -> ApplicationResult<Vec<ProcessStep>> {
        self.list().await
    }

    /// Customer testimonials.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn testimonials(&self) -> ApplicationResult<Vec<Testimonial>> {
        self.list().await
    }

    /// Frequently asked questions.
    ///
    /// # Errors
    ///
    /// See [`CatalogService::list`].
    pub async fn faqs(&self) -> ApplicationResult<Vec<Faq>> {
        self.list().await
    }
}

fn decode<R: Record>(raw: Vec<Value>) -> Vec<R> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<R>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(kind = %R::KIND, index, error = %e, "skipping undecodable record");
                None
            }
        })
        .collect()
}
