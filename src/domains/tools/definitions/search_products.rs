//! Product catalog search tool.

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
use crate::upstream::{PrintApiClient, payload};

/// Parameters for the product search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchProductsParams {
    /// Free-text search term. Omitted from the request when empty.
    #[schemars(description = "Free-text search term matched against the catalog")]
    #[serde(default)]
    pub query: Option<String>,

    /// Two-letter language code for localized product names.
    #[serde(default)]
    pub language: Option<String>,

    #[schemars(description = "Page number (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Results per page (default: 20)")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Product search tool - `GET /products` against the print API.
pub struct SearchProductsTool;

impl SearchProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the print product catalog. Supports free-text search and pagination; returns the matching products with pagination metadata.";

    #[instrument(skip_all, fields(query = params.query.as_deref().unwrap_or("")))]
    pub async fn execute(params: &SearchProductsParams, client: &PrintApiClient) -> CallToolResult {
        info!("Searching products");

        let query = payload::search_products_query(
            params.query.as_deref(),
            params.language.as_deref(),
            params.page,
            params.per_page,
        );

        match client.search_products(&query).await {
            Ok(data) => {
                let count = count_in(&data, "products");
                success_result(format!("Found {count} product(s)"), data)
            }
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchProductsParams>().into(),
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
                let params: SearchProductsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
