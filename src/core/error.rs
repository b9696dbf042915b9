//! Error types for configuration parsing and tree resolution.
//!
//! All failures in this crate are raised synchronously at the call site
//! and are never caught, logged, or retried internally. Callers either
//! handle them or prevent them by construction (for example by only
//! traversing values produced from the same tree definition).

use thiserror::Error;

/// An event was neither a primitive nor an object carrying a string `type`.
///
/// The message names both accepted shapes because it surfaces directly to
/// users wiring up machines.
///
/// # Example
///
/// ```rust
/// use stateconf::core::event_type;
/// use serde_json::json;
///
/// let err = event_type(&json!({ "kind": "go" })).unwrap_err();
/// assert!(err.to_string().contains("string `type`"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "events must be strings or numbers, or objects with a string `type` property (got {found})"
)]
pub struct InvalidEventError {
    /// Rendering of the rejected event, for diagnostics.
    pub found: String,
}

/// A path source could not be read as a state path.
///
/// Raised by [`PathInput::from_json`](crate::core::PathInput::from_json)
/// when a JSON value is neither a string nor an array of strings. No
/// coercion of other scalars is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{found}' is not a valid state path; expected a string or an array of strings")]
pub struct InvalidPathError {
    /// Rendering of the rejected source.
    pub found: String,
}

/// A state value referenced a segment absent from the definition tree.
///
/// This is a contract violation by the caller: values handed to
/// [`traverse`](crate::core::traverse) must come from the same tree they
/// are resolved against. It is propagated, never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("state node '{node_id}' has no child state '{segment}'")]
pub struct TreeResolutionError {
    /// The segment that failed to resolve.
    pub segment: String,
    /// Identifier of the node whose children were searched.
    pub node_id: String,
}
