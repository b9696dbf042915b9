//! Core configuration types and conversions.
//!
//! This module contains the pure functional core of the crate:
//! - Nested state values and their path conversions (`value`)
//! - The typed path codec (`path`)
//! - Canonicalization of accepted configuration inputs (`normalize`)
//! - Definition-tree nodes and value resolution (`node`)
//! - Event-type extraction (`event`)
//!
//! All logic in this module is pure (no side effects, no I/O); failures
//! surface as typed errors and are never handled internally.

mod error;
mod event;
mod node;
mod normalize;
mod path;
mod value;

pub use error::{InvalidEventError, InvalidPathError, TreeResolutionError};
pub use event::{event_type, EventType};
pub use node::{traverse, StateNode, Traversal};
pub use normalize::{to_state_value, ConfigInput, StateSource};
pub use path::{to_state_path, PathInput};
pub use value::{
    path_to_state_value, paths_to_state_value, state_value_to_paths, StatePath, StateValue,
};
