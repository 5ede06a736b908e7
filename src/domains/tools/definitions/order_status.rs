//! Order status tool.

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

use super::common::{api_error_result, success_result};
use crate::upstream::{PrintApiClient, payload};

/// Parameters for the order status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderStatusParams {
    /// Identifiers of the orders to look up.
    #[serde(alias = "orderIds")]
    pub order_ids: Vec<String>,
}

/// Order status tool - `POST /order/status`.
pub struct OrderStatusTool;

impl OrderStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_order_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch the current status of one or more orders by their identifiers.";

    #[instrument(skip_all, fields(count = params.order_ids.len()))]
    pub async fn execute(params: &OrderStatusParams, client: &PrintApiClient) -> CallToolResult {
        info!("Fetching order status");

        let body = payload::order_status_body(&params.order_ids);
        match client.get_order_status(&body).await {
            Ok(data) => success_result(
                format!("Fetched status for {} order(s)", params.order_ids.len()),
                data,
            ),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<OrderStatusParams>().into(),
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
                let params: OrderStatusParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
