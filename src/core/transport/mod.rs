//! Transport layer for the MCP server.
//!
//! Two transports are available, selected by feature flag and environment:
//! - **STDIO** (`stdio`, default): standard input/output, the usual MCP mode
//! - **TCP** (`tcp`): line-delimited JSON-RPC over a TCP socket
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
