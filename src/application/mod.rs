//! # Application Layer
//!
//! Use cases the API calls into.
//!
//! - [`services`]: quoting, catalog and contact services
//! - [`error`]: [`ApplicationError`](error::ApplicationError)

pub mod error;
pub mod services;
