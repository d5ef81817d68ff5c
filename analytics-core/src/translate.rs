//! Key renaming for request and response mappings.
//!
//! The source mapping is never modified; a renamed shallow copy is
//! returned. Renames apply in the iteration order of the rename table, so
//! chained tables should be passed as an ordered sequence of pairs.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

/// Copy `source`, moving each `old` key's value to `new`.
///
/// The value is inserted under `new` and then `old` is removed, so a pair
/// renaming a key to itself drops that key. Pairs whose `old` key is
/// absent are ignored; an existing `new` entry is overwritten.
///
/// ```
/// use std::collections::HashMap;
/// use analytics_core::translate::translate;
///
/// let source = HashMap::from([("a", 1), ("b", 2)]);
/// let renamed = translate(&source, [(&"a", &"c")]);
/// assert_eq!(renamed, HashMap::from([("c", 1), ("b", 2)]));
/// assert_eq!(source.len(), 2);
/// ```
pub fn translate<'a, K, V, S, I>(source: &HashMap<K, V, S>, renames: I) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = (&'a K, &'a K)>,
{
    let mut renamed = source.clone();
    for (old, new) in renames {
        if let Some(value) = renamed.get(old).cloned() {
            renamed.insert(new.clone(), value);
            renamed.remove(old);
        }
    }
    renamed
}

/// [`translate`] for JSON objects, renaming top-level fields only.
///
/// ```
/// use analytics_core::translate::translate_object;
/// use serde_json::json;
///
/// let row = json!({"name": "Home", "pageviews": 10});
/// let renamed = translate_object(row.as_object().unwrap(), [("name", "page")]);
/// assert_eq!(serde_json::Value::Object(renamed), json!({"page": "Home", "pageviews": 10}));
/// ```
pub fn translate_object<'a, I>(source: &Map<String, Value>, renames: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut renamed = source.clone();
    for (old, new) in renames {
        if let Some(value) = renamed.get(old).cloned() {
            renamed.insert(new.to_string(), value);
            renamed.remove(old);
        }
    }
    renamed
}
