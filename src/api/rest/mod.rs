//! # REST API
//!
//! JSON endpoints using axum.
//!
//! # Endpoints
//!
//! ## Quotes
//! - `POST /api/calculate-price` - Price a wall area at a tier
//!
//! ## Content
//! - `GET /api/portfolio[?category=]` - Portfolio items, optionally by category
//! - `GET /api/portfolio/categories` - Distinct portfolio categories
//! - `GET /api/services` - Offered services
//! - `GET /api/process` - Work process steps
//! - `GET /api/testimonials` - Customer testimonials
//! - `GET /api/faqs` - Frequently asked questions
//!
//! Every list is deduplicated by its natural key before it is returned.
//!
//! ## Contact
//! - `POST /api/contact` - Submit the contact form
//!
//! ## Health
//! - `GET /api/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use mural_studio::api::rest::create_router;
//! use mural_studio::bootstrap::build_state;
//! use mural_studio::settings::AppConfig;
//!
//! let state = build_state(&AppConfig::default())?;
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8001").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, BreakdownResponse, CalculatePriceRequest, CategoriesResponse,
    ContactResponse, ErrorResponse, HealthResponse, PortfolioQuery, QuoteResponse,
};
pub use routes::create_router;
