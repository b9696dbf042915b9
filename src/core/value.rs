//! Nested state values and their path conversions.
//!
//! A running statechart's configuration is not a flat label: compound
//! states nest regions and parallel states run several regions at once.
//! [`StateValue`] is the recursive representation of everything currently
//! active, and the three conversion functions here move between it and the
//! flat path representations the rest of the runtime works with.
//!
//! All conversions are pure: they allocate fresh output and never mutate
//! their inputs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered sequence of segments naming one active branch, root to leaf.
pub type StatePath = Vec<String>;

/// The set of states a machine is currently in.
///
/// Recursively either a single leaf segment, or an insertion-ordered
/// mapping from region key to the value active within that region. A
/// mapping with more than one key represents a parallel region with
/// several simultaneously active branches.
///
/// Serializes untagged, so the JSON form is the familiar statechart shape:
/// `"a"`, `{"a":"b"}`, or `{"left":"x","right":"y"}`.
///
/// # Example
///
/// ```rust
/// use stateconf::core::StateValue;
///
/// let leaf = StateValue::from("idle");
/// assert_eq!(serde_json::to_value(&leaf).unwrap(), serde_json::json!("idle"));
///
/// let nested: StateValue = [("playback", "paused")].into_iter().collect();
/// assert_eq!(
///     serde_json::to_value(&nested).unwrap(),
///     serde_json::json!({ "playback": "paused" })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// A leaf state is active directly.
    Leaf(String),
    /// One or more active child regions, keyed by region segment.
    Compound(IndexMap<String, StateValue>),
}

impl StateValue {
    /// Returns the leaf segment if this value is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            StateValue::Leaf(segment) => Some(segment),
            StateValue::Compound(_) => None,
        }
    }

    /// Returns the region mapping if this value is compound.
    pub fn as_compound(&self) -> Option<&IndexMap<String, StateValue>> {
        match self {
            StateValue::Leaf(_) => None,
            StateValue::Compound(regions) => Some(regions),
        }
    }
}

impl From<&str> for StateValue {
    fn from(segment: &str) -> Self {
        StateValue::Leaf(segment.to_owned())
    }
}

impl From<String> for StateValue {
    fn from(segment: String) -> Self {
        StateValue::Leaf(segment)
    }
}

impl From<IndexMap<String, StateValue>> for StateValue {
    fn from(regions: IndexMap<String, StateValue>) -> Self {
        StateValue::Compound(regions)
    }
}

impl<K, V> FromIterator<(K, V)> for StateValue
where
    K: Into<String>,
    V: Into<StateValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StateValue::Compound(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Convert a single sequential path into its nested value.
///
/// A one-segment path is exactly the leaf of that segment; longer paths
/// become a chain of single-key mappings terminating in the final segment
/// as a leaf. This encodes one branch only; merging sibling branches is
/// [`paths_to_state_value`]'s job.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{path_to_state_value, StateValue};
///
/// let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let expected: StateValue = [("a", [("b", "c")].into_iter().collect::<StateValue>())]
///     .into_iter()
///     .collect();
/// assert_eq!(path_to_state_value(&path), expected);
///
/// assert_eq!(
///     path_to_state_value(&["idle".to_string()]),
///     StateValue::from("idle")
/// );
/// ```
pub fn path_to_state_value(path: &[String]) -> StateValue {
    match path.split_last() {
        None => StateValue::Compound(IndexMap::new()),
        Some((last, ancestors)) => {
            ancestors
                .iter()
                .rev()
                .fold(StateValue::Leaf(last.clone()), |inner, segment| {
                    let mut region = IndexMap::new();
                    region.insert(segment.clone(), inner);
                    StateValue::Compound(region)
                })
        }
    }
}

/// Enumerate every maximal active branch of a nested value.
///
/// A leaf yields the single one-segment path `[[leaf]]`. A compound value
/// recurses per key in insertion order, prepending the key to every
/// sub-path and concatenating across keys. A mapping with more than one
/// key at some level is how parallel regions surface as multiple paths
/// sharing that level's prefix.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{state_value_to_paths, StateValue};
///
/// let parallel: StateValue = [("a", "x"), ("b", "y")].into_iter().collect();
/// assert_eq!(
///     state_value_to_paths(&parallel),
///     vec![
///         vec!["a".to_string(), "x".to_string()],
///         vec!["b".to_string(), "y".to_string()],
///     ]
/// );
/// ```
pub fn state_value_to_paths(value: &StateValue) -> Vec<StatePath> {
    match value {
        StateValue::Leaf(segment) => vec![vec![segment.clone()]],
        StateValue::Compound(regions) => regions
            .iter()
            .flat_map(|(key, inner)| {
                state_value_to_paths(inner).into_iter().map(|sub_path| {
                    let mut path = Vec::with_capacity(sub_path.len() + 1);
                    path.push(key.clone());
                    path.extend(sub_path);
                    path
                })
            })
            .collect(),
    }
}

/// Merge a set of paths back into one nested value.
///
/// The inverse of [`state_value_to_paths`]: a set of exactly one
/// single-segment path yields that leaf directly; otherwise the paths are
/// merged into a single compound, sharing intermediate mappings where
/// prefixes overlap. A level where two paths diverge becomes the multi-key
/// mapping that represents parallel activation.
///
/// Each path of length ≥ 2 terminates with its last segment assigned as a
/// leaf under the second-to-last, overwriting whatever an earlier path put
/// in that exact slot: the last writer for a slot wins, and a later
/// deeper path likewise replaces an earlier leaf blocking its way.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{paths_to_state_value, StateValue};
///
/// let paths = vec![
///     vec!["a".to_string(), "x".to_string()],
///     vec!["b".to_string(), "y".to_string()],
/// ];
/// let expected: StateValue = [("a", "x"), ("b", "y")].into_iter().collect();
/// assert_eq!(paths_to_state_value(&paths), expected);
/// ```
pub fn paths_to_state_value(paths: &[StatePath]) -> StateValue {
    if let [only] = paths {
        if let [segment] = only.as_slice() {
            return StateValue::Leaf(segment.clone());
        }
    }

    let mut regions = IndexMap::new();
    for path in paths {
        merge_path(&mut regions, path);
    }

    StateValue::Compound(regions)
}

fn merge_path(regions: &mut IndexMap<String, StateValue>, path: &[String]) {
    match path {
        [] => {}
        [segment] => {
            // A bare segment has nothing beneath it to merge; it claims
            // its slot without disturbing what another path put there.
            regions
                .entry(segment.clone())
                .or_insert_with(|| StateValue::Compound(IndexMap::new()));
        }
        [parent, leaf] => {
            regions.insert(parent.clone(), StateValue::Leaf(leaf.clone()));
        }
        [head, rest @ ..] => {
            let slot = regions
                .entry(head.clone())
                .or_insert_with(|| StateValue::Compound(IndexMap::new()));
            if matches!(slot, StateValue::Leaf(_)) {
                *slot = StateValue::Compound(IndexMap::new());
            }
            if let StateValue::Compound(children) = slot {
                merge_path(children, rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> StatePath {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_segment_path_becomes_leaf() {
        assert_eq!(
            path_to_state_value(&path(&["green"])),
            StateValue::from("green")
        );
    }

    #[test]
    fn long_path_becomes_single_key_chain() {
        let value = path_to_state_value(&path(&["a", "b", "c"]));
        let expected: StateValue = [("a", [("b", "c")].into_iter().collect::<StateValue>())]
            .into_iter()
            .collect();
        assert_eq!(value, expected);
    }

    #[test]
    fn leaf_yields_single_one_segment_path() {
        assert_eq!(
            state_value_to_paths(&StateValue::from("idle")),
            vec![path(&["idle"])]
        );
    }

    #[test]
    fn parallel_value_yields_one_path_per_branch() {
        let value: StateValue = [("a", "x"), ("b", "y")].into_iter().collect();
        assert_eq!(
            state_value_to_paths(&value),
            vec![path(&["a", "x"]), path(&["b", "y"])]
        );
    }

    #[test]
    fn branch_paths_share_their_ancestor_prefix() {
        let inner: StateValue = [("left", "x"), ("right", "y")].into_iter().collect();
        let value: StateValue = [("outer", inner)].into_iter().collect();
        assert_eq!(
            state_value_to_paths(&value),
            vec![path(&["outer", "left", "x"]), path(&["outer", "right", "y"])]
        );
    }

    #[test]
    fn singleton_short_path_set_returns_leaf() {
        assert_eq!(
            paths_to_state_value(&[path(&["idle"])]),
            StateValue::from("idle")
        );
    }

    #[test]
    fn merging_sibling_paths_produces_parallel_value() {
        let merged = paths_to_state_value(&[path(&["a", "x"]), path(&["b", "y"])]);
        let expected: StateValue = [("a", "x"), ("b", "y")].into_iter().collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn merging_preserves_path_order_as_key_order() {
        let merged = paths_to_state_value(&[path(&["b", "y"]), path(&["a", "x"])]);
        let regions = merged.as_compound().expect("merged value is compound");
        let keys: Vec<&String> = regions.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn shared_prefix_merges_into_one_mapping() {
        let merged = paths_to_state_value(&[path(&["p", "a", "x"]), path(&["p", "b", "y"])]);
        let inner: StateValue = [("a", "x"), ("b", "y")].into_iter().collect();
        let expected: StateValue = [("p", inner)].into_iter().collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn last_writer_wins_for_a_leaf_slot() {
        // ["p","b"] assigns the leaf "b" directly over the mapping at "p".
        let merged = paths_to_state_value(&[path(&["p", "a", "x"]), path(&["p", "b"])]);
        assert_eq!(merged, [("p", "b")].into_iter().collect::<StateValue>());
    }

    #[test]
    fn deeper_path_replaces_an_earlier_leaf_on_its_way() {
        let merged = paths_to_state_value(&[path(&["p", "b"]), path(&["p", "a", "x"])]);
        let inner: StateValue = [("a", "x")].into_iter().collect();
        let expected: StateValue = [("p", inner)].into_iter().collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn round_trip_preserves_parallel_structure() {
        let inner: StateValue = [("left", "x"), ("right", "y")].into_iter().collect();
        let value: StateValue = [("outer", inner)].into_iter().collect();
        assert_eq!(paths_to_state_value(&state_value_to_paths(&value)), value);
    }

    #[test]
    fn round_trip_preserves_leaf() {
        let value = StateValue::from("solo");
        assert_eq!(paths_to_state_value(&state_value_to_paths(&value)), value);
    }

    #[test]
    fn value_serializes_to_statechart_json() {
        let inner: StateValue = [("b", "c")].into_iter().collect();
        let value: StateValue = [("a", inner)].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!({ "a": { "b": "c" } })
        );
    }

    #[test]
    fn value_deserializes_from_statechart_json() {
        let value: StateValue =
            serde_json::from_value(serde_json::json!({ "a": { "b": "c" } })).unwrap();
        let inner: StateValue = [("b", "c")].into_iter().collect();
        let expected: StateValue = [("a", inner)].into_iter().collect();
        assert_eq!(value, expected);
    }
}
