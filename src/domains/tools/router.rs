//! Tool router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together around the shared upstream client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    CancelOrderTool, ConfigureProductTool, ListOrdersTool, OrderStatusTool, PlaceOrderTool,
    SearchProductsTool,
};
use crate::upstream::PrintApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<PrintApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchProductsTool::create_route(client.clone()))
        .with_route(ConfigureProductTool::create_route(client.clone()))
        .with_route(PlaceOrderTool::create_route(client.clone()))
        .with_route(OrderStatusTool::create_route(client.clone()))
        .with_route(ListOrdersTool::create_route(client.clone()))
        .with_route(CancelOrderTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UpstreamConfig;

    struct TestServer {}

    fn test_client() -> Arc<PrintApiClient> {
        Arc::new(
            PrintApiClient::new(&UpstreamConfig {
                api_key: "test-key".to_string(),
                ..Default::default()
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_products"));
        assert!(names.contains(&"configure_product"));
        assert!(names.contains(&"place_order"));
        assert!(names.contains(&"get_order_status"));
        assert!(names.contains(&"get_all_orders"));
        assert!(names.contains(&"cancel_order"));
    }

    #[test]
    fn test_every_tool_has_schema_and_description() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} lacks description", tool.name);
            assert!(
                !tool.input_schema.is_empty(),
                "{} lacks input schema",
                tool.name
            );
        }
    }
}
