//! Upstream print API integration.
//!
//! Layering, leaves first:
//!
//! - `types` - argument and wire types shared across the crate
//! - `payload` - pure request builders encoding every defaulting rule
//! - `error` - normalization of heterogeneous upstream failures
//! - `client` - one long-lived HTTP client executing the six operations

pub mod client;
pub mod error;
pub mod payload;
pub mod types;

pub use client::PrintApiClient;
pub use error::ApiError;
