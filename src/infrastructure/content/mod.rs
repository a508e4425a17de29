//! # Content Sources
//!
//! Where display record lists come from.
//!
//! ## Port
//!
//! - [`ContentSource`]: fetch the raw list of a record kind
//!
//! ## Implementations
//!
//! - [`RemoteContentSource`]: the site's data service over HTTP
//! - [`InMemoryContentSource`]: in-process lists, optionally seeded

pub mod error;
pub mod http_client;
pub mod in_memory;
pub mod remote;
mod seed;
pub mod traits;

pub use error::{ContentError, ContentResult};
pub use http_client::HttpClient;
pub use in_memory::InMemoryContentSource;
pub use remote::RemoteContentSource;
pub use traits::ContentSource;
