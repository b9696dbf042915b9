//! Splitting and joining of delimited state paths.
//!
//! A path source arrives either pre-split (an ordered sequence of
//! segments) or as one delimited string. [`PathInput`] makes the two
//! shapes explicit instead of sniffing them at runtime, and
//! [`to_state_path`] turns either into a [`StatePath`]. Dynamic sources
//! (machine configs deserialized from JSON) enter through
//! [`PathInput::from_json`], which rejects anything that is not a string
//! or an array of strings; no coercion of other values is attempted.

use serde_json::Value;

use super::error::InvalidPathError;
use super::value::StatePath;

/// A raw path source: already-split segments, or delimited text.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{to_state_path, PathInput};
///
/// let from_text = to_state_path(PathInput::Text("a.b.c".into()), ".");
/// assert_eq!(from_text, vec!["a", "b", "c"]);
///
/// let segments = vec!["a".to_string(), "b".to_string()];
/// let passthrough = to_state_path(PathInput::Segments(segments.clone()), ".");
/// assert_eq!(passthrough, segments);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathInput {
    /// Segments in order; returned unchanged, never re-split.
    Segments(StatePath),
    /// A delimited string, split on the codec's delimiter.
    Text(String),
}

impl PathInput {
    /// Read a path source out of a JSON value.
    ///
    /// Accepts a string or an array of strings; everything else fails
    /// with [`InvalidPathError`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateconf::core::PathInput;
    /// use serde_json::json;
    ///
    /// assert_eq!(
    ///     PathInput::from_json(&json!("a.b")).unwrap(),
    ///     PathInput::Text("a.b".into())
    /// );
    /// assert!(PathInput::from_json(&json!(42)).is_err());
    /// assert!(PathInput::from_json(&json!(["a", 1])).is_err());
    /// ```
    pub fn from_json(source: &Value) -> Result<Self, InvalidPathError> {
        match source {
            Value::String(text) => Ok(PathInput::Text(text.clone())),
            Value::Array(items) => {
                let segments = items
                    .iter()
                    .map(|item| match item {
                        Value::String(segment) => Ok(segment.clone()),
                        other => Err(InvalidPathError {
                            found: other.to_string(),
                        }),
                    })
                    .collect::<Result<StatePath, _>>()?;
                Ok(PathInput::Segments(segments))
            }
            other => Err(InvalidPathError {
                found: other.to_string(),
            }),
        }
    }
}

impl From<&str> for PathInput {
    fn from(text: &str) -> Self {
        PathInput::Text(text.to_owned())
    }
}

impl From<String> for PathInput {
    fn from(text: String) -> Self {
        PathInput::Text(text)
    }
}

impl From<StatePath> for PathInput {
    fn from(segments: StatePath) -> Self {
        PathInput::Segments(segments)
    }
}

/// Resolve a path source into its ordered segments.
///
/// Pre-split segments pass through untouched. Text is split on
/// `delimiter`, keeping empty tokens from consecutive delimiters. The
/// split is intentionally permissive, matching how machine definitions
/// treat their delimiter.
pub fn to_state_path(input: PathInput, delimiter: &str) -> StatePath {
    match input {
        PathInput::Segments(segments) => segments,
        PathInput::Text(text) => text.split(delimiter).map(str::to_owned).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_text_on_delimiter() {
        assert_eq!(
            to_state_path("a.b.c".into(), "."),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn segments_pass_through_unchanged() {
        let segments = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            to_state_path(PathInput::Segments(segments.clone()), "."),
            segments
        );
    }

    #[test]
    fn segments_containing_delimiter_are_not_resplit() {
        let segments = vec!["a.b".to_string()];
        assert_eq!(
            to_state_path(PathInput::Segments(segments.clone()), "."),
            segments
        );
    }

    #[test]
    fn consecutive_delimiters_keep_empty_tokens() {
        assert_eq!(
            to_state_path("a..b".into(), "."),
            vec!["a".to_string(), "".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn custom_delimiters_are_honored() {
        assert_eq!(
            to_state_path("a/b".into(), "/"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn json_string_becomes_text() {
        assert_eq!(
            PathInput::from_json(&json!("a.b")).unwrap(),
            PathInput::Text("a.b".into())
        );
    }

    #[test]
    fn json_string_array_becomes_segments() {
        assert_eq!(
            PathInput::from_json(&json!(["a", "b"])).unwrap(),
            PathInput::Segments(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn json_scalars_are_rejected_without_coercion() {
        for source in [json!(42), json!(true), json!(null), json!(1.5)] {
            let err = PathInput::from_json(&source).unwrap_err();
            assert!(err.to_string().contains("not a valid state path"));
        }
    }

    #[test]
    fn json_mixed_array_is_rejected() {
        assert!(PathInput::from_json(&json!(["a", 1])).is_err());
    }

    #[test]
    fn json_object_is_rejected() {
        assert!(PathInput::from_json(&json!({ "a": "b" })).is_err());
    }
}
