//! HTTP client for the print API.
//!
//! One long-lived [`reqwest::Client`] is built from configuration at startup
//! and shared by every tool invocation; requests carry a static Basic-auth
//! header derived from the API key. Each operation is one outbound call with
//! no retries and no local state.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ApiError;
use super::payload::{CancelBody, ConfigureBody, OrderBody, SearchQuery, StatusBody};
use super::types::OrderFilters;
use crate::core::config::UpstreamConfig;

/// Message prefixes identifying the failing operation in normalized errors.
const PREFIX_SEARCH: &str = "Product search failed";
const PREFIX_CONFIGURE: &str = "Product configuration failed";
const PREFIX_PLACE: &str = "Order placement failed";
const PREFIX_STATUS: &str = "Order status request failed";
const PREFIX_LIST: &str = "Order listing failed";
const PREFIX_CANCEL: &str = "Order cancellation failed";

/// Client for the upstream print-fulfillment REST API.
pub struct PrintApiClient {
    http: reqwest::Client,
    base_url: String,
    /// Applied to `order_type` when the caller does not pass `is_test`.
    default_test_mode: bool,
}

impl PrintApiClient {
    /// Build the client from upstream configuration.
    ///
    /// The Basic-auth credential is the API key with an empty password,
    /// installed as a default header so every request carries it.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ApiError> {
        let credential = BASE64.encode(format!("{}:", config.api_key));
        let mut auth = HeaderValue::from_str(&format!("Basic {credential}"))
            .map_err(|e| ApiError::request("Client initialization failed", e))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::request("Client initialization failed", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_test_mode: config.test_mode,
        })
    }

    /// Whether orders default to `order_type: "test"`.
    pub fn default_test_mode(&self) -> bool {
        self.default_test_mode
    }

    /// `GET /products` — search the product catalog.
    ///
    /// The upstream returns the product list under `data`; it is reshaped
    /// into `{products, meta}` so callers get a stable field name.
    pub async fn search_products(&self, query: &SearchQuery) -> Result<Value, ApiError> {
        let body = self.get(PREFIX_SEARCH, "/products", query).await?;

        let mut reshaped = serde_json::Map::new();
        reshaped.insert(
            "products".to_string(),
            body.get("data").cloned().unwrap_or(Value::Array(Vec::new())),
        );
        if let Some(meta) = body.get("meta") {
            reshaped.insert("meta".to_string(), meta.clone());
        }
        Ok(Value::Object(reshaped))
    }

    /// `POST /products/configure` — price and validate a configuration.
    pub async fn configure_product(&self, body: &ConfigureBody) -> Result<Value, ApiError> {
        self.post(PREFIX_CONFIGURE, "/products/configure", body).await
    }

    /// `POST /order` — place an order.
    pub async fn place_order(&self, body: &OrderBody) -> Result<Value, ApiError> {
        self.post(PREFIX_PLACE, "/order", body).await
    }

    /// `POST /order/status` — fetch status for a set of orders.
    pub async fn get_order_status(&self, body: &StatusBody) -> Result<Value, ApiError> {
        self.post(PREFIX_STATUS, "/order/status", body).await
    }

    /// `GET /orders` — list orders matching the given filters.
    pub async fn get_all_orders(&self, filters: &OrderFilters) -> Result<Value, ApiError> {
        self.get(PREFIX_LIST, "/orders", filters).await
    }

    /// `POST /order/cancel` — request cancellation of an order.
    pub async fn cancel_order(&self, body: &CancelBody) -> Result<Value, ApiError> {
        self.post(PREFIX_CANCEL, "/order/cancel", body).await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    async fn get<Q: Serialize>(
        &self,
        prefix: &str,
        path: &str,
        query: &Q,
    ) -> Result<Value, ApiError> {
        let query_string =
            serde_urlencoded::to_string(query).map_err(|e| ApiError::request(prefix, e))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query_string)
        };
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(prefix, &e))?;
        Self::read_json(prefix, response).await
    }

    async fn post<B: Serialize>(
        &self,
        prefix: &str,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(prefix, &e))?;
        Self::read_json(prefix, response).await
    }

    async fn read_json(prefix: &str, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(prefix, &e))?;

        if !status.is_success() {
            let err = ApiError::from_response(prefix, status.as_u16(), &text);
            error!("{}", err.message());
            return Err(err);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| ApiError::request(prefix, format!("invalid JSON in response: {e}")))
    }
}
