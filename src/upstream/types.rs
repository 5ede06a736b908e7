//! Argument and wire types for the print API.
//!
//! These types appear inside tool parameter structs (deserialized from MCP
//! arguments, with JSON schemas published to clients) and inside the request
//! bodies built by [`super::payload`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A delivery address.
///
/// The upstream API requires every field to be present; optional fields are
/// substituted with an empty string when the wire shape is built.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    /// House number addition (e.g. "a", "2nd floor").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<String>,
    pub postal_code: String,
    pub city: String,
    /// Two-letter country code.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A product option value: free text, a number, or a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}

/// A single (code, value) product option.
///
/// Option order is preserved; duplicate codes are passed through and left for
/// the upstream API to accept or reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductOption {
    pub code: String,
    pub value: OptionValue,
}

impl ProductOption {
    pub fn new(code: impl Into<String>, value: OptionValue) -> Self {
        Self {
            code: code.into(),
            value,
        }
    }
}

/// Reference to an artwork file attached to an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileRef {
    pub uri: String,
    /// Whether the file should be scaled to fill the printable area.
    #[serde(default)]
    pub fill: bool,
}

/// One product line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrderProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Customer-assigned product code, used when `code` is absent.
    #[serde(default, alias = "customerCode", skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaders: Option<Vec<String>>,
}

/// The product configuration of an order: its lines plus a language code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrderConfiguration {
    pub products: Vec<OrderProduct>,
    /// Two-letter language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A value that callers may supply either as a bare string or as a list.
///
/// The upstream API always expects a list; bare strings are normalized to a
/// single-element list when the payload is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// Optional order-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AdditionalOrderOptions {
    /// Stable order identifier. Generated from the current time when absent.
    #[serde(default, alias = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, alias = "contactEmail", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Callback URL(s) notified on order progress.
    #[serde(default, alias = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<StringOrList>,
    /// Email address(es) notified on order errors.
    #[serde(default, alias = "errorEmails", skip_serializing_if = "Option::is_none")]
    pub error_emails: Option<StringOrList>,
    #[serde(
        default,
        alias = "shippingMethodPreset",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_method_preset: Option<String>,
    #[serde(
        default,
        alias = "deliveryDatePreset",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_date_preset: Option<String>,
}

/// Filters for the order listing endpoint, encoded verbatim into the query
/// string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OrderFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date_to: Option<String>,
}
