//! Order cancellation tool.

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

/// Parameters for the order cancellation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CancelOrderParams {
    /// Identifier of the order to cancel.
    #[serde(alias = "orderId")]
    pub order_id: String,
}

/// Order cancellation tool - `POST /order/cancel`.
pub struct CancelOrderTool;

impl CancelOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "cancel_order";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Request cancellation of an order by its identifier. Cancellation is idempotent; the upstream reports the resulting status.";

    #[instrument(skip_all, fields(order_id = %params.order_id))]
    pub async fn execute(params: &CancelOrderParams, client: &PrintApiClient) -> CallToolResult {
        info!("Cancelling order");

        let body = payload::cancel_order_body(&params.order_id);
        match client.cancel_order(&body).await {
            Ok(data) => success_result(
                format!("Cancellation requested for order '{}'", params.order_id),
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
            input_schema: schema_for_type::<CancelOrderParams>().into(),
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
                let params: CancelOrderParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
