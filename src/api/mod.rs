//! # API Layer
//!
//! - [`rest`]: HTTP JSON endpoints

pub mod rest;
