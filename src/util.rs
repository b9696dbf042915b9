//! Generic helpers shared with the surrounding runtime.
//!
//! Nothing here knows about state values; these are the small mapping and
//! deep-access utilities the machine layers build on.

use indexmap::IndexMap;
use serde_json::Value;

/// Rebuild a mapping by applying `f` to every entry.
///
/// Keys are preserved, in order; `f` receives the value, its key, and the
/// whole source mapping.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use stateconf::util::map_values;
///
/// let mut counts: IndexMap<String, u32> = IndexMap::new();
/// counts.insert("a".into(), 1);
/// counts.insert("b".into(), 2);
///
/// let doubled = map_values(&counts, |count, _key, _all| count * 2);
/// assert_eq!(doubled.get("b"), Some(&4));
/// ```
pub fn map_values<V, R, F>(collection: &IndexMap<String, V>, mut f: F) -> IndexMap<String, R>
where
    F: FnMut(&V, &str, &IndexMap<String, V>) -> R,
{
    collection
        .iter()
        .map(|(key, value)| (key.clone(), f(value, key, collection)))
        .collect()
}

/// Curried deep accessor over JSON values.
///
/// `path(segments)` returns a function that walks nested object access.
/// A missing key at any step yields `None` and stays `None` through the
/// remaining steps; no error is raised for a broken chain.
///
/// # Example
///
/// ```rust
/// use stateconf::util::path;
/// use serde_json::json;
///
/// let get = path(vec!["a".to_string(), "b".to_string()]);
/// let object = json!({ "a": { "b": 1 } });
/// assert_eq!(get(&object), Some(&json!(1)));
/// assert_eq!(get(&json!({ "a": {} })), None);
/// assert_eq!(get(&json!({})), None);
/// ```
pub fn path(segments: Vec<String>) -> impl Fn(&Value) -> Option<&Value> {
    fn walk<'v>(segments: &[String], object: &'v Value) -> Option<&'v Value> {
        let mut current = Some(object);
        for segment in segments {
            current = current.and_then(|value| value.get(segment));
        }
        current
    }

    move |object| walk(&segments, object)
}
