//! Order placement tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{api_error_result, success_result};
use crate::upstream::types::{AdditionalOrderOptions, Address, OrderConfiguration};
use crate::upstream::{PrintApiClient, payload};

/// Parameters for the order placement tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlaceOrderParams {
    /// The product configuration to order: product lines plus language.
    pub configuration: OrderConfiguration,

    /// Delivery address.
    pub address: Address,

    /// Free-text order reference, passed through verbatim.
    pub reference: String,

    /// Place a test order instead of a production order. Falls back to the
    /// server's configured default mode when omitted.
    #[serde(default, alias = "isTest")]
    pub is_test: Option<bool>,

    /// Optional order-level settings (stable order id, contact email,
    /// callbacks, delivery presets).
    #[serde(default, alias = "additionalOptions")]
    pub additional_options: Option<AdditionalOrderOptions>,
}

/// Order placement tool - `POST /order`.
pub struct PlaceOrderTool;

impl PlaceOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "place_order";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Place a print order for a configured product set with a delivery address and reference. Defaults to a test order unless the server is configured for production; pass a stable order id in additional_options to make placement idempotent.";

    #[instrument(skip_all, fields(reference = %params.reference))]
    pub async fn execute(params: &PlaceOrderParams, client: &PrintApiClient) -> CallToolResult {
        let options = params.additional_options.clone().unwrap_or_default();
        let is_test = params.is_test.unwrap_or_else(|| client.default_test_mode());
        info!("Placing {} order", if is_test { "test" } else { "production" });

        let body = payload::place_order_body(
            &params.configuration,
            &params.address,
            &params.reference,
            is_test,
            &options,
        );
        let request_id = body.id.clone();

        match client.place_order(&body).await {
            Ok(data) => {
                let id = order_id_from(&data).unwrap_or(request_id);
                success_result(format!("Order placed: id '{id}'"), data)
            }
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<PlaceOrderParams>().into(),
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
                let params: PlaceOrderParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// The order id reported by the upstream, wherever it puts it.
fn order_id_from(data: &Value) -> Option<String> {
    data.get("order")
        .and_then(|order| order.get("id"))
        .or_else(|| data.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
