//! Upstream failure normalization.
//!
//! Every failure of an upstream call is folded into one [`ApiError`] carrying
//! a human-readable message and, for HTTP failures, the raw response body for
//! programmatic inspection. Normalization itself never fails.

use serde_json::Value;
use thiserror::Error;

/// Validation sub-errors enumerated in a 400 message before truncation.
const MAX_LISTED_ERRORS: usize = 10;

/// A normalized upstream failure.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The upstream responded with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Raw upstream error body, when it was JSON.
        data: Option<Value>,
    },

    /// The request was sent but no response arrived.
    #[error("{message}")]
    NoResponse { message: String },

    /// The request could not be constructed or sent at all.
    #[error("{message}")]
    Request { message: String },
}

impl ApiError {
    /// The human-readable message, identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            Self::Http { message, .. }
            | Self::NoResponse { message }
            | Self::Request { message } => message,
        }
    }

    /// Structured detail payload, when the upstream supplied one.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Http { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// Create a local request-construction error.
    pub fn request(prefix: &str, detail: impl std::fmt::Display) -> Self {
        Self::Request {
            message: format!("{prefix}: {detail}"),
        }
    }

    /// Normalize a transport-level `reqwest` failure.
    ///
    /// Builder errors mean the request never left this process; everything
    /// else (connect, timeout, aborted body) is treated as a request that was
    /// sent without a response arriving.
    pub fn from_transport(prefix: &str, err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::request(prefix, err)
        } else {
            Self::NoResponse {
                message: format!("{prefix}: No response received"),
            }
        }
    }

    /// Normalize a non-2xx upstream response.
    ///
    /// The message starts with `<prefix>: HTTP <status>` and is extended with
    /// the body's `message` field when present, the plain-text body when the
    /// body is not JSON, or the serialized JSON body otherwise. A 400 body
    /// with an `errors` field gets its validation errors enumerated, at most
    /// [`MAX_LISTED_ERRORS`] of them followed by a remainder count.
    pub fn from_response(prefix: &str, status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body.trim()).ok();
        let mut message = format!("{prefix}: HTTP {status}");

        match &parsed {
            Some(json) => {
                if let Some(detail) = json.get("message").and_then(Value::as_str) {
                    message.push_str(": ");
                    message.push_str(detail);
                } else {
                    message.push_str(": ");
                    message.push_str(&json.to_string());
                }
            }
            None if !body.trim().is_empty() => {
                message.push_str(": ");
                message.push_str(body.trim());
            }
            None => {}
        }

        if status == 400 {
            if let Some(errors) = parsed.as_ref().and_then(|json| json.get("errors")) {
                for line in enumerate_errors(errors) {
                    message.push('\n');
                    message.push_str(&line);
                }
            }
        }

        Self::Http {
            status,
            message,
            data: parsed,
        }
    }
}

/// Collect validation error strings from an upstream `errors` field.
///
/// A newline-delimited string is split and de-duplicated (order preserved);
/// a list is used as-is. At most [`MAX_LISTED_ERRORS`] entries are returned,
/// with a trailing remainder note when more exist.
fn enumerate_errors(errors: &Value) -> Vec<String> {
    let collected: Vec<String> = match errors {
        Value::String(joined) => {
            let mut seen = Vec::new();
            for line in joined.lines() {
                let line = line.trim();
                if !line.is_empty() && !seen.iter().any(|s| s == line) {
                    seen.push(line.to_string());
                }
            }
            seen
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => return Vec::new(),
    };

    let total = collected.len();
    let mut lines: Vec<String> = collected
        .into_iter()
        .take(MAX_LISTED_ERRORS)
        .map(|e| format!("- {e}"))
        .collect();
    if total > MAX_LISTED_ERRORS {
        lines.push(format!("... and {} more errors", total - MAX_LISTED_ERRORS));
    }
    lines
}
