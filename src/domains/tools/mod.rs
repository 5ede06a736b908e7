//! Tools domain module.
//!
//! All externally callable tools of the server live here:
//!
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder wiring the tools to the transports
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`, and
//!    `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
