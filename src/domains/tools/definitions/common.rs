//! Shared result-envelope helpers for the print tools.
//!
//! Every tool returns the same envelope: a human-readable summary as text
//! content, the raw result as structured content, and an explicit error
//! flag. Failures carry `{error, details?}` so callers can inspect the
//! upstream response programmatically; no exception ever crosses the tool
//! boundary.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::upstream::ApiError;

/// Build a success envelope from a summary line and the operation's data.
pub fn success_result(summary: impl Into<String>, data: Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary.into())],
        structured_content: Some(data),
        is_error: Some(false),
        meta: None,
    }
}

/// Build an error envelope from a normalized upstream failure.
pub fn api_error_result(err: &ApiError) -> CallToolResult {
    warn!("{}", err.message());

    let mut details = serde_json::Map::new();
    details.insert(
        "error".to_string(),
        Value::String(err.message().to_string()),
    );
    if let Some(data) = err.data() {
        details.insert("details".to_string(), data.clone());
    }

    CallToolResult {
        content: vec![Content::text(format!("Error: {}", err.message()))],
        structured_content: Some(Value::Object(details)),
        is_error: Some(true),
        meta: None,
    }
}

/// Number of elements in a JSON array field, for summary lines.
pub fn count_in(data: &Value, field: &str) -> usize {
    data.get(field)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Extract the text summary from a result envelope (test helper).
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let result = success_result("Found 2 product(s)", json!({"products": []}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "Found 2 product(s)");
        assert_eq!(result.structured_content, Some(json!({"products": []})));
    }

    #[test]
    fn test_error_envelope_carries_details() {
        let err = ApiError::from_response("Order placement failed", 422, r#"{"message":"bad"}"#);
        let result = api_error_result(&err);

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Error: Order placement failed: HTTP 422: bad"
        );
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["details"], json!({"message": "bad"}));
        assert!(structured["error"].as_str().unwrap().contains("HTTP 422"));
    }

    #[test]
    fn test_error_envelope_without_details() {
        let err = ApiError::request("Order listing failed", "invalid query");
        let result = api_error_result(&err);
        let structured = result.structured_content.unwrap();
        assert!(structured.get("details").is_none());
    }

    #[test]
    fn test_count_in() {
        let data = json!({"orders": [1, 2, 3]});
        assert_eq!(count_in(&data, "orders"), 3);
        assert_eq!(count_in(&data, "products"), 0);
    }
}
