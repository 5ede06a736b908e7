//! Order listing tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{api_error_result, count_in, success_result};
use crate::upstream::types::OrderFilters;
use crate::upstream::PrintApiClient;

/// Parameters for the order listing tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOrdersParams {
    /// Filters applied by the upstream: page, per_page, status,
    /// customer_order_id, order_date_from, order_date_to.
    #[serde(default)]
    pub filters: Option<OrderFilters>,
}

/// Order listing tool - `GET /orders`.
pub struct ListOrdersTool;

impl ListOrdersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_all_orders";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List orders, optionally filtered by status, customer order id, date range, and pagination.";

    #[instrument(skip_all)]
    pub async fn execute(params: &ListOrdersParams, client: &PrintApiClient) -> CallToolResult {
        info!("Listing orders");

        let filters = params.filters.clone().unwrap_or_default();
        match client.get_all_orders(&filters).await {
            Ok(data) => {
                let count = count_in(&data, "orders");
                success_result(format!("Found {count} order(s)"), data)
            }
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListOrdersParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared upstream client.
    pub fn create_route<S>(client: Arc<PrintApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListOrdersParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_all_optional() {
        let params: ListOrdersParams = serde_json::from_str("{}").unwrap();
        assert!(params.filters.is_none());
    }

    #[test]
    fn test_params_with_filters() {
        let params: ListOrdersParams =
            serde_json::from_str(r#"{"filters":{"status":"shipped","page":2}}"#).unwrap();
        let filters = params.filters.unwrap();
        assert_eq!(filters.status.as_deref(), Some("shipped"));
        assert_eq!(filters.page, Some(2));
        assert!(filters.order_date_from.is_none());
    }
}
