//! # Mural Studio
//!
//! Backend for a mural painting studio's website.
//!
//! The two pieces of real logic are the quote engine, which prices a wall
//! area at a complexity tier with a volume discount, and the list
//! normalizer, which deduplicates every display list by the record kind's
//! natural key before it leaves the service.
//!
//! # Architecture
//!
//! ```text
//! api (axum) -> application -> domain
//!                    |
//!                    v
//!              infrastructure (content sources, contact sinks)
//! ```
//!
//! - [`domain`]: pure types, the quote engine and the list normalizer
//! - [`application`]: services orchestrating domain logic and ports
//! - [`infrastructure`]: HTTP and in-memory adapters
//! - [`api`]: REST endpoints
//! - [`settings`]: layered configuration
//! - [`telemetry`]: tracing setup
//! - [`bootstrap`]: wiring from configuration
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::services::compute_quote;
//!
//! let quote = compute_quote(25.0, "standard").unwrap();
//! assert_eq!(quote.discount_percent(), 5);
//! assert_eq!(quote.final_price(), 83_125.0);
//! ```

pub mod api;
pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod settings;
pub mod telemetry;
