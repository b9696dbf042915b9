//! Event-type extraction.
//!
//! Events reach a machine either as a bare primitive (`"go"`, `42`) or as
//! an object whose `type` field names them. Both shapes normalize to one
//! canonical [`EventType`] string.

use serde_json::Value;

use super::error::InvalidEventError;

/// Canonical name of an event.
pub type EventType = String;

/// Extract the canonical type of an event.
///
/// Strings pass through, numbers stringify, and objects must carry a
/// string `type` field. Anything else fails with [`InvalidEventError`],
/// whose message names both accepted shapes.
///
/// # Example
///
/// ```rust
/// use stateconf::core::event_type;
/// use serde_json::json;
///
/// assert_eq!(event_type(&json!("go")).unwrap(), "go");
/// assert_eq!(event_type(&json!(42)).unwrap(), "42");
/// assert_eq!(event_type(&json!({ "type": "go", "payload": 1 })).unwrap(), "go");
/// assert!(event_type(&json!({})).is_err());
/// ```
pub fn event_type(event: &Value) -> Result<EventType, InvalidEventError> {
    match event {
        Value::String(name) => Ok(name.clone()),
        Value::Number(code) => Ok(code.to_string()),
        Value::Object(fields) => match fields.get("type") {
            Some(Value::String(name)) => Ok(name.clone()),
            _ => Err(InvalidEventError {
                found: event.to_string(),
            }),
        },
        other => Err(InvalidEventError {
            found: other.to_string(),
        }),
    }
}
