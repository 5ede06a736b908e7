//! Tool definitions, one file per tool.
//!
//! Each tool defines its parameters struct, `NAME`/`DESCRIPTION` constants,
//! an async `execute` against the shared upstream client, and a
//! `create_route` used by the router.

mod cancel_order;
mod common;
mod configure_product;
mod list_orders;
mod order_status;
mod place_order;
mod search_products;

pub use cancel_order::{CancelOrderParams, CancelOrderTool};
pub use configure_product::{ConfigureProductParams, ConfigureProductTool};
pub use list_orders::{ListOrdersParams, ListOrdersTool};
pub use order_status::{OrderStatusParams, OrderStatusTool};
pub use place_order::{PlaceOrderParams, PlaceOrderTool};
pub use search_products::{SearchProductsParams, SearchProductsTool};
