//! Status messages and the errors extracted from them

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Error reported by an operation's status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationError {
    /// Machine-readable code, when the payload carries one
    pub code: Option<String>,

    /// Top-level message followed by detail messages, one per line
    pub message: String,
}

/// The status message layouts the CLI is known to return
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessageShape<'a> {
    /// Missing or `null`
    Absent,

    /// A bare string
    PlainString(&'a str),

    /// `{"error": {"code", "message", "details": [..]}}`
    ErrorWrapped(&'a Map<String, Value>),

    /// `{"code", "message", "details": [..]}`, seen on deployment-level statuses
    DetailsDirect(&'a Map<String, Value>),

    /// Anything else
    Unrecognized(&'a Value),
}

impl<'a> StatusMessageShape<'a> {
    /// Classify a raw `statusMessage` value
    pub fn classify(status_message: Option<&'a Value>) -> Self {
        let Some(value) = status_message else {
            return StatusMessageShape::Absent;
        };

        match value {
            Value::Null => StatusMessageShape::Absent,
            Value::String(text) => StatusMessageShape::PlainString(text),
            Value::Object(map) => match map.get("error") {
                Some(Value::Object(error)) => StatusMessageShape::ErrorWrapped(error),
                _ if map.contains_key("details") => StatusMessageShape::DetailsDirect(map),
                _ => StatusMessageShape::Unrecognized(value),
            },
            other => StatusMessageShape::Unrecognized(other),
        }
    }

    /// Normalize into an [`OperationError`]
    pub fn into_error(self) -> Option<OperationError> {
        match self {
            StatusMessageShape::Absent => None,
            StatusMessageShape::PlainString(text) => Some(OperationError {
                code: None,
                message: text.to_string(),
            }),
            StatusMessageShape::ErrorWrapped(error) => Some(from_message_and_details(error)),
            StatusMessageShape::DetailsDirect(status) => Some(from_message_and_details(status)),
            StatusMessageShape::Unrecognized(value) => {
                warn!(
                    "Unrecognized status message shape, no error information extracted: {}",
                    value
                );
                None
            }
        }
    }
}

/// Extract an [`OperationError`] from a raw `statusMessage`, if it describes one
pub fn extract_error(status_message: Option<&Value>) -> Option<OperationError> {
    StatusMessageShape::classify(status_message).into_error()
}

fn from_message_and_details(object: &Map<String, Value>) -> OperationError {
    let mut lines: Vec<&str> = Vec::new();

    if let Some(message) = object.get("message").and_then(Value::as_str) {
        lines.push(message);
    }

    match object.get("details") {
        Some(Value::Array(details)) => {
            lines.extend(
                details
                    .iter()
                    .filter_map(|detail| detail.get("message").and_then(Value::as_str)),
            );
        }
        None | Some(Value::Null) => {}
        Some(other) => warn!("Ignoring status message details that are not a list: {}", other),
    }

    OperationError {
        code: object.get("code").and_then(code_string),
        message: lines.join("\n"),
    }
}

fn code_string(code: &Value) -> Option<String> {
    match code {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}
