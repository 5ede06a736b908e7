//! Print MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing print-fulfillment
//! operations - product search, configuration, order placement, status,
//! listing, and cancellation - as schema-validated tools backed by a
//! third-party print REST API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and the
//!   transport layer
//! - **upstream**: the print API integration - wire types, pure payload
//!   builders, failure normalization, and the HTTP client
//! - **domains::tools**: the six MCP tools and their router
//!
//! # Example
//!
//! ```rust,no_run
//! use print_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod upstream;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
