//! # REST Routes
//!
//! Router assembly.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the API router over `state`.
///
/// Every route lives under `/api`. Requests are traced by `tower-http` and
/// CORS allows any origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/calculate-price", post(handlers::calculate_price))
        .route("/portfolio", get(handlers::list_portfolio))
        .route("/portfolio/categories", get(handlers::list_portfolio_categories))
        .route("/services", get(handlers::list_services))
        .route("/process", get(handlers::list_process_steps))
        .route("/testimonials", get(handlers::list_testimonials))
        .route("/faqs", get(handlers::list_faqs))
        .route("/contact", post(handlers::submit_contact))
}
