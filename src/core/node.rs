//! Definition-tree nodes and resolution of values against them.
//!
//! A machine definition is a tree of [`StateNode`]s: each node has a
//! stable identifier, the key used to reach it from its parent, and an
//! insertion-ordered mapping from child key to child node. [`traverse`]
//! walks a [`StateValue`] and the tree together, substituting each
//! node's identifier for its key and pairing it with the structure of its
//! active children. The tree is only ever read; its shape invariants
//! (acyclic, unique keys per level) are the definition builder's problem.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::TreeResolutionError;
use super::value::StateValue;

/// One node of an externally built machine definition tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    /// Stable identifier, unique across the whole tree.
    pub id: String,
    /// The segment used to reach this node from its parent.
    pub key: String,
    /// Child nodes, keyed by their segment, in definition order.
    pub states: IndexMap<String, StateNode>,
}

impl StateNode {
    /// Create a childless node.
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            states: IndexMap::new(),
        }
    }

    /// Attach a child, keyed by the child's own `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateconf::core::StateNode;
    ///
    /// let root = StateNode::new("light", "light")
    ///     .with_state(StateNode::new("light.green", "green"))
    ///     .with_state(StateNode::new("light.red", "red"));
    /// assert_eq!(root.child("green").unwrap().id, "light.green");
    /// ```
    pub fn with_state(mut self, child: StateNode) -> Self {
        self.states.insert(child.key.clone(), child);
        self
    }

    /// Look up the child reached by `segment`.
    ///
    /// Absence means the caller handed this tree a value it did not
    /// produce; the error carries both sides of the mismatch.
    pub fn child(&self, segment: &str) -> Result<&StateNode, TreeResolutionError> {
        self.states
            .get(segment)
            .ok_or_else(|| TreeResolutionError {
                segment: segment.to_owned(),
                node_id: self.id.clone(),
            })
    }
}

/// A state value re-expressed in node identifiers.
///
/// Recursively a bare identifier or a sequence of results, serializing
/// untagged to the nested-array wire shape: `["R", ["A", ["B"]]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Traversal {
    /// A single node identifier (or, at a parallel branch, a node key).
    Id(String),
    /// An ordered pairing or sequence of nested results.
    Seq(Vec<Traversal>),
}

/// Resolve a state value against a definition tree.
///
/// - A leaf segment resolves to `[node.id, [child.id]]`.
/// - A single-key mapping collapses transparently: `[node.id, recurse]`.
/// - A multi-key mapping is a parallel region and resolves to
///   `[node.key, [recurse per key, in insertion order]]`. The branching
///   level carries the node's *key* where every other level carries its
///   identifier; the asymmetry is preserved for compatibility with
///   existing consumers of the wire shape.
///
/// Fails with [`TreeResolutionError`] when a segment has no matching
/// child; the error is propagated, never recovered here.
///
/// # Example
///
/// ```rust
/// use stateconf::core::{traverse, StateNode, StateValue};
///
/// let root = StateNode::new("R", "r")
///     .with_state(StateNode::new("A", "a").with_state(StateNode::new("B", "b")));
///
/// let value: StateValue = [("a", "b")].into_iter().collect();
/// let resolved = traverse(&value, &root).unwrap();
/// assert_eq!(
///     serde_json::to_value(&resolved).unwrap(),
///     serde_json::json!(["R", ["A", ["B"]]])
/// );
/// ```
pub fn traverse(value: &StateValue, node: &StateNode) -> Result<Traversal, TreeResolutionError> {
    match value {
        StateValue::Leaf(segment) => {
            let child = node.child(segment)?;
            Ok(Traversal::Seq(vec![
                Traversal::Id(node.id.clone()),
                Traversal::Seq(vec![Traversal::Id(child.id.clone())]),
            ]))
        }
        StateValue::Compound(branches) => match branches.first() {
            Some((key, inner)) if branches.len() == 1 => {
                let resolved = traverse(inner, node.child(key)?)?;
                Ok(Traversal::Seq(vec![
                    Traversal::Id(node.id.clone()),
                    resolved,
                ]))
            }
            _ => {
                let resolved = branches
                    .iter()
                    .map(|(key, inner)| traverse(inner, node.child(key)?))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Traversal::Seq(vec![
                    Traversal::Id(node.key.clone()),
                    Traversal::Seq(resolved),
                ]))
            }
        },
    }
}
