//! Canonicalization of the accepted state-configuration inputs.
//!
//! Callers hand the runtime a current configuration in one of three
//! shapes: a wrapped state object from a previous step, a nested value, or
//! a raw path. [`ConfigInput`] is the tagged union of exactly those three,
//! so accepting anything else is a compile error rather than undefined
//! runtime behavior, and [`to_state_value`] collapses all of them into the
//! canonical [`StateValue`].

use super::path::{to_state_path, PathInput};
use super::value::{path_to_state_value, StateValue};

/// Read access to the nested value a wrapped state object carries.
///
/// The object-oriented `State` wrapper lives outside this core; this trait
/// is the seam through which it is treated as an opaque source of a
/// [`StateValue`]. Implemented for [`StateValue`] itself so callers
/// without a wrapper type can use [`ConfigInput<StateValue>`].
pub trait StateSource {
    /// Borrow the carried nested value.
    fn state_value(&self) -> &StateValue;

    /// Take the carried nested value, cloning only when the source
    /// cannot give it up.
    fn into_state_value(self) -> StateValue
    where
        Self: Sized,
    {
        self.state_value().clone()
    }
}

impl StateSource for StateValue {
    fn state_value(&self) -> &StateValue {
        self
    }

    fn into_state_value(self) -> StateValue {
        self
    }
}

/// The three shapes a state configuration may arrive in.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{to_state_value, ConfigInput, StateValue};
///
/// let value = to_state_value(ConfigInput::<StateValue>::from("a.b"), ".");
/// let expected: StateValue = [("a", "b")].into_iter().collect();
/// assert_eq!(value, expected);
/// ```
#[derive(Clone, Debug)]
pub enum ConfigInput<S> {
    /// A wrapped state object; its carried value is used as-is.
    State(S),
    /// Already a nested value; passed through unchanged.
    Value(StateValue),
    /// A raw path, split and chained into a single-branch value.
    Path(PathInput),
}

impl<S> From<StateValue> for ConfigInput<S> {
    fn from(value: StateValue) -> Self {
        ConfigInput::Value(value)
    }
}

impl<S> From<PathInput> for ConfigInput<S> {
    fn from(path: PathInput) -> Self {
        ConfigInput::Path(path)
    }
}

impl<S> From<&str> for ConfigInput<S> {
    fn from(text: &str) -> Self {
        ConfigInput::Path(PathInput::Text(text.to_owned()))
    }
}

impl<S> From<String> for ConfigInput<S> {
    fn from(text: String) -> Self {
        ConfigInput::Path(PathInput::Text(text))
    }
}

impl<S> From<Vec<String>> for ConfigInput<S> {
    fn from(segments: Vec<String>) -> Self {
        ConfigInput::Path(PathInput::Segments(segments))
    }
}

/// Collapse any accepted input into the canonical nested value.
///
/// A wrapped state yields its carried value without further processing; a
/// nested value passes through unchanged; a path is split with
/// `delimiter` and chained into a single-branch value via
/// [`path_to_state_value`].
///
/// # Example
///
/// ```rust
/// use stateconf::core::{to_state_value, ConfigInput, StateValue};
///
/// let nested: StateValue = [("a", "b")].into_iter().collect();
///
/// // A value passes through untouched.
/// assert_eq!(
///     to_state_value(ConfigInput::<StateValue>::Value(nested.clone()), "."),
///     nested
/// );
///
/// // A wrapped state yields what it carries.
/// assert_eq!(
///     to_state_value(ConfigInput::State(nested.clone()), "."),
///     nested
/// );
/// ```
pub fn to_state_value<S: StateSource>(input: ConfigInput<S>, delimiter: &str) -> StateValue {
    match input {
        ConfigInput::State(state) => state.into_state_value(),
        ConfigInput::Value(value) => value,
        ConfigInput::Path(path) => path_to_state_value(&to_state_path(path, delimiter)),
    }
}
