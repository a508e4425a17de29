//! # REST Handlers
//!
//! Request handlers, shared state and wire DTOs for the REST API.

use crate::application::error::ApplicationError;
use crate::application::services::{CatalogService, ContactService, QuoteService};
use crate::domain::entities::{
    ContactRequest, Faq, PortfolioItem, ProcessStep, Service, Testimonial,
};
use crate::domain::errors::{QuoteError, QuoteResult};
use crate::domain::value_objects::{CategoryFilter, QuoteBreakdown, Tier};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Acknowledgement returned for an accepted contact form.
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for reaching out! We will contact you shortly.";

// ============================================================================
// Application State
// ============================================================================

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote pricing.
    pub quotes: QuoteService,
    /// Display lists.
    pub catalog: CatalogService,
    /// Contact form intake.
    pub contacts: ContactService,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Body of `POST /api/calculate-price`.
///
/// Fields are taken as raw JSON so that a missing, `null` or wrongly typed
/// field is reported as a rejected field instead of an undecodable body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatePriceRequest {
    /// Wall area in m², expected to be a number.
    pub area: Option<Value>,
    /// Tier name, expected to be a string.
    pub tier: Option<Value>,
}

impl CalculatePriceRequest {
    /// Extracts a numeric area and a string tier, area first.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] naming the first field that is
    /// missing or of the wrong JSON type.
    pub fn into_parts(self) -> QuoteResult<(f64, String)> {
        let area = match self.area {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| QuoteError::invalid_area("must be a number"))?,
            None | Some(Value::Null) => return Err(QuoteError::invalid_area("is required")),
            Some(_) => return Err(QuoteError::invalid_area("must be a number")),
        };
        let tier = match self.tier {
            Some(Value::String(tier)) => tier,
            None | Some(Value::Null) => return Err(QuoteError::invalid_tier("is required")),
            Some(_) => return Err(QuoteError::invalid_tier("must be a string")),
        };
        Ok((area, tier))
    }
}

/// Itemized part of a [`QuoteResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownResponse {
    /// The tier's rate per m².
    pub base_price_per_m2: f64,
    /// Requested area.
    pub area: f64,
    /// Area times rate, before discount.
    pub subtotal: f64,
    /// Discount in whole percent.
    pub discount: u8,
    /// Final rounded price.
    pub total: f64,
    /// Display description of the tier.
    pub tier_description: String,
}

/// Response of `POST /api/calculate-price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Requested area.
    pub area: f64,
    /// Requested tier.
    pub tier: Tier,
    /// Final rounded price.
    pub price: f64,
    /// Itemized breakdown.
    pub breakdown: BreakdownResponse,
}

impl From<QuoteBreakdown> for QuoteResponse {
    fn from(quote: QuoteBreakdown) -> Self {
        Self {
            area: quote.area(),
            tier: quote.tier(),
            price: quote.final_price(),
            breakdown: BreakdownResponse {
                base_price_per_m2: quote.base_price_per_m2(),
                area: quote.area(),
                subtotal: quote.subtotal(),
                discount: quote.discount_percent(),
                total: quote.final_price(),
                tier_description: quote.tier().description().to_string(),
            },
        }
    }
}

/// Query string of `GET /api/portfolio`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioQuery {
    /// Category to show. Absent or `all` shows everything.
    #[serde(default)]
    pub category: CategoryFilter,
}

/// Response of `GET /api/portfolio/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
}

/// Response of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Always true on success.
    pub success: bool,
    /// Submission identifier.
    pub id: Uuid,
    /// Acknowledgement for the visitor.
    pub message: String,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Rejected input field, for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Error Mapping
// ============================================================================

/// [`ApplicationError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl<E: Into<ApplicationError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// Status code for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "request failed");
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
            field: self.0.field(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/calculate-price`
///
/// # Errors
///
/// 400 for a missing or non-numeric area, a non-positive area, a missing
/// or non-string tier, or an unknown tier.
pub async fn calculate_price(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CalculatePriceRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let (area, tier) = request.into_parts()?;
    let quote = state.quotes.calculate(area, &tier)?;
    Ok(Json(quote.into()))
}

/// `GET /api/portfolio[?category=]`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_portfolio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PortfolioQuery>,
) -> Result<Json<Vec<PortfolioItem>>, ApiError> {
    Ok(Json(state.catalog.portfolio(&query.category).await?))
}

/// `GET /api/portfolio/categories`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_portfolio_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.catalog.portfolio_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// `GET /api/services`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(state.catalog.services().await?))
}

/// `GET /api/process`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_process_steps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProcessStep>>, ApiError> {
    Ok(Json(state.catalog.process_steps().await?))
}

/// `GET /api/testimonials`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(state.catalog.testimonials().await?))
}

/// `GET /api/faqs`
///
/// # Errors
///
/// 502 if the content source fails.
pub async fn list_faqs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(state.catalog.faqs().await?))
}

/// `POST /api/contact`
///
/// # Errors
///
/// 400 for a rejected field, 502 if the contact sink fails.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let submission = state.contacts.submit(request).await?;
    Ok(Json(ContactResponse {
        success: true,
        id: submission.id,
        message: CONTACT_ACK_MESSAGE.to_string(),
    }))
}
