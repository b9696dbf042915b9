//! Stateconf: hierarchical state configurations for statechart runtimes.
//!
//! A running statechart is rarely in a single flat state: compound states
//! nest regions and parallel states activate several regions at once.
//! This crate is the pure core that moves between the three equivalent
//! representations of "which leaf states are active, through which
//! ancestors":
//!
//! - a delimited string path (`"a.b.c"`),
//! - a nested [`StateValue`] (a leaf segment, or an ordered mapping from
//!   region key to nested value),
//! - a set of ordered paths, optionally resolved against a
//!   [`StateNode`] definition tree into stable identifiers.
//!
//! Every operation is a pure, synchronous transformation over immutable
//! inputs; failures are typed errors raised at the call site and never
//! handled internally.
//!
//! # Example
//!
//! ```rust
//! use stateconf::core::{
//!     paths_to_state_value, state_value_to_paths, to_state_value, ConfigInput, StateValue,
//! };
//!
//! // Normalize a dotted path into the canonical nested value.
//! let value = to_state_value(ConfigInput::<StateValue>::from("player.running"), ".");
//! let expected: StateValue = [("player", "running")].into_iter().collect();
//! assert_eq!(value, expected);
//!
//! // A parallel configuration flattens to one path per active branch,
//! // and merging the paths recovers the value.
//! let parallel: StateValue = [("audio", "muted"), ("video", "playing")]
//!     .into_iter()
//!     .collect();
//! let paths = state_value_to_paths(&parallel);
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths_to_state_value(&paths), parallel);
//! ```

pub mod core;
pub mod util;

// Re-export commonly used types
pub use crate::core::{
    event_type, paths_to_state_value, state_value_to_paths, to_state_path, to_state_value,
    traverse, ConfigInput, PathInput, StateNode, StatePath, StateValue, Traversal,
};
