//! Request payload builders for the print API.
//!
//! Every builder is a pure function from validated arguments to the exact
//! body or query shape the upstream API expects. All defaulting and
//! conditional-inclusion rules live here, independent of any network code,
//! so they can be tested without a mock transport.

use chrono::Utc;
use serde::Serialize;

use super::types::{
    AdditionalOrderOptions, Address, FileRef, OptionValue, OrderConfiguration, OrderProduct,
    ProductOption, StringOrList,
};

/// Default page size for product search.
const DEFAULT_PER_PAGE: u32 = 20;

/// Dimension fallback applied when a configuration carries no width/height.
const DEFAULT_DIMENSION_MM: i64 = 1000;

/// Preset applied to deliveries when the caller does not choose one.
const DEFAULT_PRESET: &str = "cheapest";

/// Artwork placeholder attached to order lines that carry neither options nor
/// files, so the upstream API accepts the product line.
pub const PLACEHOLDER_FILE_URI: &str = "https://placeholder.invalid/artwork.pdf";

// ============================================================================
// Wire shapes
// ============================================================================

/// Query parameters for `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Address as the upstream API expects it: every field present, empty string
/// standing in for unset optionals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireAddress {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    pub addition: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl From<&Address> for WireAddress {
    fn from(address: &Address) -> Self {
        Self {
            company_name: address.company_name.clone().unwrap_or_default(),
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            street: address.street.clone(),
            house_number: address.house_number.clone(),
            addition: address.addition.clone().unwrap_or_default(),
            postal_code: address.postal_code.clone(),
            city: address.city.clone(),
            country: address.country.clone(),
            phone: address.phone.clone().unwrap_or_default(),
            email: address.email.clone().unwrap_or_default(),
        }
    }
}

/// One delivery entry. Presets are only populated for orders; the configure
/// endpoint takes a bare address.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub address: WireAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date_preset: Option<String>,
}

/// Body for `POST /products/configure`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigureBody {
    pub products: Vec<ConfigureEntry>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<Vec<Delivery>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigureEntry {
    pub code: String,
    pub options: Vec<ProductOption>,
}

/// One product line as the order endpoint expects it. Absent keys must be
/// missing from the JSON entirely, not serialized as null.
#[derive(Debug, Clone, Serialize)]
pub struct WireOrderProduct {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaders: Option<Vec<String>>,
}

/// Body for `POST /order`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBody {
    /// Mandatory upstream-side order identifier.
    pub id: String,
    pub order_type: String,
    pub reference: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_email_addresses: Option<Vec<String>>,
    pub deliveries: Vec<Delivery>,
    pub products: Vec<WireOrderProduct>,
}

/// Body for `POST /order/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBody {
    pub orders: Vec<OrderIdRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderIdRef {
    pub id: String,
}

/// Body for `POST /order/cancel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelBody {
    pub id: String,
}

// ============================================================================
// Builders
// ============================================================================

/// Build the product search query. Page defaults to 1, page size to 20; the
/// search term is only included when non-empty.
pub fn search_products_query(
    query: Option<&str>,
    language: Option<&str>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> SearchQuery {
    SearchQuery {
        page: page.unwrap_or(1),
        per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        search: query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
        language: language.map(str::to_string),
    }
}

/// Build the configuration request for a single product.
///
/// When the caller supplies no `width`/`width_mm` option, a `width` of
/// 1000 is appended; likewise for `height`/`height_mm`.
pub fn configure_product_body(
    product_code: &str,
    options: &[ProductOption],
    address: Option<&Address>,
    language: Option<&str>,
) -> ConfigureBody {
    let mut options = options.to_vec();
    ensure_dimension(&mut options, "width", "width_mm");
    ensure_dimension(&mut options, "height", "height_mm");

    ConfigureBody {
        products: vec![ConfigureEntry {
            code: product_code.to_string(),
            options,
        }],
        language: language.unwrap_or("en").to_string(),
        deliveries: address.map(|a| {
            vec![Delivery {
                address: a.into(),
                shipping_method_preset: None,
                delivery_date_preset: None,
            }]
        }),
    }
}

fn ensure_dimension(options: &mut Vec<ProductOption>, code: &str, alt_code: &str) {
    if !options.iter().any(|o| o.code == code || o.code == alt_code) {
        options.push(ProductOption::new(
            code,
            OptionValue::Integer(DEFAULT_DIMENSION_MM),
        ));
    }
}

/// Build the order placement request.
pub fn place_order_body(
    configuration: &OrderConfiguration,
    address: &Address,
    reference: &str,
    is_test: bool,
    options: &AdditionalOrderOptions,
) -> OrderBody {
    let contact_email = address
        .email
        .clone()
        .or_else(|| options.contact_email.clone())
        .unwrap_or_default();

    OrderBody {
        id: options.order_id.clone().unwrap_or_else(generate_order_id),
        order_type: if is_test { "test" } else { "production" }.to_string(),
        reference: reference.to_string(),
        contact_email,
        callback_url: options.callback_url.clone().map(StringOrList::into_vec),
        error_email_addresses: options.error_emails.clone().map(StringOrList::into_vec),
        deliveries: vec![Delivery {
            address: address.into(),
            shipping_method_preset: Some(
                options
                    .shipping_method_preset
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRESET.to_string()),
            ),
            delivery_date_preset: Some(
                options
                    .delivery_date_preset
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRESET.to_string()),
            ),
        }],
        products: configuration.products.iter().map(wire_product).collect(),
    }
}

fn wire_product(product: &OrderProduct) -> WireOrderProduct {
    let code = product
        .code
        .clone()
        .or_else(|| product.customer_code.clone())
        .unwrap_or_default();

    let options = product.options.clone().filter(|o| !o.is_empty());
    let files = match (&options, &product.files) {
        // Explicit files always win
        (_, Some(files)) if !files.is_empty() => Some(files.clone()),
        // Options alone are enough for the upstream to accept the line
        (Some(_), _) => None,
        // Neither options nor files: synthesize a placeholder so the
        // upstream accepts the product line
        (None, _) => Some(vec![FileRef {
            uri: PLACEHOLDER_FILE_URI.to_string(),
            fill: true,
        }]),
    };

    WireOrderProduct {
        code,
        options,
        files,
        uploader: product.uploader.clone().filter(|u| !u.is_empty()),
        uploaders: product.uploaders.clone().filter(|u| !u.is_empty()),
    }
}

/// Build the order status request. An empty id list is passed through; the
/// upstream defines its behavior.
pub fn order_status_body(order_ids: &[String]) -> StatusBody {
    StatusBody {
        orders: order_ids
            .iter()
            .map(|id| OrderIdRef { id: id.clone() })
            .collect(),
    }
}

/// Build the cancellation request.
pub fn cancel_order_body(order_id: &str) -> CancelBody {
    CancelBody {
        id: order_id.to_string(),
    }
}

/// Generate a unique order identifier from the current time.
///
/// Used when the caller supplies no stable `order_id`; the upstream API
/// requires the field. Nanosecond resolution keeps successive calls distinct.
pub fn generate_order_id() -> String {
    format!("mcp-{}", Utc::now().format("%Y%m%d%H%M%S%9f"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_address() -> Address {
        Address {
            company_name: None,
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            street: "Main".to_string(),
            house_number: "1".to_string(),
            addition: None,
            postal_code: "1234AB".to_string(),
            city: "Utrecht".to_string(),
            country: "NL".to_string(),
            phone: None,
            email: None,
        }
    }

    fn bare_product(code: &str) -> OrderProduct {
        OrderProduct {
            code: Some(code.to_string()),
            customer_code: None,
            options: None,
            files: None,
            uploader: None,
            uploaders: None,
        }
    }

    #[test]
    fn test_search_query_defaults() {
        let q = search_products_query(None, None, None, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 20);
        assert!(q.search.is_none());

        let encoded = serde_urlencoded::to_string(&q).unwrap();
        assert_eq!(encoded, "page=1&per_page=20");
    }

    #[test]
    fn test_search_query_empty_term_omitted() {
        let q = search_products_query(Some("   "), None, Some(2), Some(50));
        assert_eq!(q.page, 2);
        assert_eq!(q.per_page, 50);
        assert!(q.search.is_none());

        let q = search_products_query(Some("banner"), Some("nl"), None, None);
        assert_eq!(q.search.as_deref(), Some("banner"));
        assert_eq!(q.language.as_deref(), Some("nl"));
    }

    #[test]
    fn test_configure_appends_default_dimensions() {
        let body = configure_product_body("banner", &[], None, None);
        let options = &body.products[0].options;
        assert_eq!(options.len(), 2);
        assert_eq!(
            options[0],
            ProductOption::new("width", OptionValue::Integer(1000))
        );
        assert_eq!(
            options[1],
            ProductOption::new("height", OptionValue::Integer(1000))
        );
        assert_eq!(body.language, "en");
        assert!(body.deliveries.is_none());
    }

    #[test]
    fn test_configure_width_mm_suppresses_default_width() {
        let supplied = vec![ProductOption::new("width_mm", OptionValue::Integer(2500))];
        let body = configure_product_body("banner", &supplied, None, Some("de"));
        let options = &body.products[0].options;

        let widths: Vec<_> = options
            .iter()
            .filter(|o| o.code == "width" || o.code == "width_mm")
            .collect();
        assert_eq!(widths.len(), 1);
        assert_eq!(widths[0].value, OptionValue::Integer(2500));

        // Height was not supplied, so the default is still appended
        assert!(options
            .iter()
            .any(|o| o.code == "height" && o.value == OptionValue::Integer(1000)));
        assert_eq!(body.language, "de");
    }

    #[test]
    fn test_configure_with_address_attaches_delivery() {
        let address = test_address();
        let body = configure_product_body("banner", &[], Some(&address), None);
        let deliveries = body.deliveries.expect("deliveries should be present");
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].address.first_name, "Jo");
        // The configure endpoint takes a bare address without presets
        let json = serde_json::to_value(&deliveries[0]).unwrap();
        assert!(json.get("shipping_method_preset").is_none());
    }

    #[test]
    fn test_wire_address_empty_string_fallback() {
        let wire: WireAddress = (&test_address()).into();
        assert_eq!(wire.company_name, "");
        assert_eq!(wire.addition, "");
        assert_eq!(wire.phone, "");
        assert_eq!(wire.email, "");
        assert_eq!(wire.city, "Utrecht");
    }

    #[test]
    fn test_order_type_from_is_test() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let opts = AdditionalOrderOptions::default();

        let body = place_order_body(&config, &test_address(), "ref", true, &opts);
        assert_eq!(body.order_type, "test");

        let body = place_order_body(&config, &test_address(), "ref", false, &opts);
        assert_eq!(body.order_type, "production");
        assert_eq!(body.reference, "ref");
    }

    #[test]
    fn test_order_placeholder_file_synthesis() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );

        let files = body.products[0].files.as_ref().expect("placeholder file");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].uri, PLACEHOLDER_FILE_URI);
        assert!(files[0].fill);
        assert!(body.products[0].options.is_none());
    }

    #[test]
    fn test_order_options_suppress_placeholder() {
        let mut product = bare_product("banner");
        product.options = Some(vec![ProductOption::new(
            "width",
            OptionValue::Integer(500),
        )]);
        let config = OrderConfiguration {
            products: vec![product],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );

        assert!(body.products[0].files.is_none());
        assert_eq!(body.products[0].options.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_order_explicit_files_pass_through() {
        let mut product = bare_product("banner");
        product.files = Some(vec![FileRef {
            uri: "https://cdn.example.com/artwork.pdf".to_string(),
            fill: false,
        }]);
        let config = OrderConfiguration {
            products: vec![product],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );

        let files = body.products[0].files.as_ref().unwrap();
        assert_eq!(files[0].uri, "https://cdn.example.com/artwork.pdf");
    }

    #[test]
    fn test_order_code_falls_back_to_customer_code() {
        let product = OrderProduct {
            code: None,
            customer_code: Some("cust-1".to_string()),
            options: None,
            files: None,
            uploader: None,
            uploaders: None,
        };
        let config = OrderConfiguration {
            products: vec![product],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        assert_eq!(body.products[0].code, "cust-1");
    }

    #[test]
    fn test_order_callback_url_normalized_to_list() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let opts = AdditionalOrderOptions {
            callback_url: Some(StringOrList::One("https://cb.example.com".to_string())),
            error_emails: Some(StringOrList::Many(vec![
                "a@example.com".to_string(),
                "b@example.com".to_string(),
            ])),
            ..Default::default()
        };
        let body = place_order_body(&config, &test_address(), "ref", true, &opts);

        assert_eq!(
            body.callback_url,
            Some(vec!["https://cb.example.com".to_string()])
        );
        assert_eq!(
            body.error_email_addresses,
            Some(vec!["a@example.com".to_string(), "b@example.com".to_string()])
        );
    }

    #[test]
    fn test_order_omits_callback_url_when_absent() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        let json = serde_json::to_value(&body).unwrap();
        // Keys must be missing, not null
        assert!(json.get("callback_url").is_none());
        assert!(json.get("error_email_addresses").is_none());
    }

    #[test]
    fn test_order_delivery_presets_default_to_cheapest() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        let delivery = &body.deliveries[0];
        assert_eq!(delivery.shipping_method_preset.as_deref(), Some("cheapest"));
        assert_eq!(delivery.delivery_date_preset.as_deref(), Some("cheapest"));
    }

    #[test]
    fn test_order_contact_email_precedence() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let mut address = test_address();
        address.email = Some("addr@example.com".to_string());
        let opts = AdditionalOrderOptions {
            contact_email: Some("opts@example.com".to_string()),
            ..Default::default()
        };

        let body = place_order_body(&config, &address, "ref", true, &opts);
        assert_eq!(body.contact_email, "addr@example.com");

        let body = place_order_body(&config, &test_address(), "ref", true, &opts);
        assert_eq!(body.contact_email, "opts@example.com");

        let body = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        assert_eq!(body.contact_email, "");
    }

    #[test]
    fn test_order_id_supplied_vs_generated() {
        let config = OrderConfiguration {
            products: vec![bare_product("banner")],
            language: None,
        };
        let opts = AdditionalOrderOptions {
            order_id: Some("stable-1".to_string()),
            ..Default::default()
        };
        let body = place_order_body(&config, &test_address(), "ref", true, &opts);
        assert_eq!(body.id, "stable-1");

        let a = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        let b = place_order_body(
            &config,
            &test_address(),
            "ref",
            true,
            &AdditionalOrderOptions::default(),
        );
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_body_shape() {
        let body = order_status_body(&["o1".to_string(), "o2".to_string()]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"orders": [{"id": "o1"}, {"id": "o2"}]})
        );

        // Empty list is passed through, behavior is upstream-defined
        let body = order_status_body(&[]);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"orders": []}));
    }

    #[test]
    fn test_cancel_body_shape() {
        let body = cancel_order_body("o1");
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"id": "o1"}));
    }

    #[test]
    fn test_list_orders_filters_encode_verbatim() {
        let filters = crate::upstream::types::OrderFilters {
            page: Some(2),
            status: Some("shipped".to_string()),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&filters).unwrap();
        assert_eq!(encoded, "page=2&status=shipped");
    }
}
