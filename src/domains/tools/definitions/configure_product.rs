//! Product configuration tool.

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
use crate::upstream::types::{Address, ProductOption};
use crate::upstream::{PrintApiClient, payload};

/// Parameters for the product configuration tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfigureProductParams {
    /// Product code from the catalog.
    #[serde(alias = "productCode")]
    pub product_code: String,

    /// Product options as (code, value) pairs. When no width/height option
    /// is present a 1000mm default is applied for each missing dimension.
    #[serde(default)]
    pub options: Option<Vec<ProductOption>>,

    /// Delivery address used to quote shipping.
    #[serde(default)]
    pub address: Option<Address>,

    /// Two-letter language code (default: "en").
    #[serde(default)]
    pub language: Option<String>,
}

/// Product configuration tool - `POST /products/configure`.
pub struct ConfigureProductTool;

impl ConfigureProductTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "configure_product";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Configure a print product: validate an option set and get pricing. Missing width/height options default to 1000mm. Optionally include a delivery address to quote shipping.";

    #[instrument(skip_all, fields(product_code = %params.product_code))]
    pub async fn execute(
        params: &ConfigureProductParams,
        client: &PrintApiClient,
    ) -> CallToolResult {
        info!("Configuring product");

        let body = payload::configure_product_body(
            &params.product_code,
            params.options.as_deref().unwrap_or(&[]),
            params.address.as_ref(),
            params.language.as_deref(),
        );

        match client.configure_product(&body).await {
            Ok(data) => success_result(
                format!("Configured product '{}'", params.product_code),
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
            input_schema: schema_for_type::<ConfigureProductParams>().into(),
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
                let params: ConfigureProductParams =
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
    fn test_params_require_product_code() {
        let result: Result<ConfigureProductParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_params_camel_case_alias() {
        let params: ConfigureProductParams =
            serde_json::from_str(r#"{"productCode":"banner"}"#).unwrap();
        assert_eq!(params.product_code, "banner");
        assert!(params.options.is_none());
    }

    #[test]
    fn test_params_with_options() {
        let params: ConfigureProductParams = serde_json::from_str(
            r#"{"product_code":"banner","options":[{"code":"width","value":500}],"language":"nl"}"#,
        )
        .unwrap();
        assert_eq!(params.options.as_ref().unwrap().len(), 1);
        assert_eq!(params.language.as_deref(), Some("nl"));
    }
}
