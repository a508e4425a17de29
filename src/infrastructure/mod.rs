//! # Infrastructure Layer
//!
//! Adapters for the ports the application layer depends on.
//!
//! - [`content`]: display record lists (remote HTTP, in-memory)
//! - [`contact`]: contact submission delivery

pub mod contact;
pub mod content;
