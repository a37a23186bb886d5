//! Selection and reshaping helpers over map nodes.
//!
//! The helpers that address items by a dotted path (`pluck`, `group_by`,
//! `key_by`, `sort_by`) are also available on [`PathConfig`].

use std::cmp::Ordering;

use tracing::trace;

use crate::{
    path::{Keys, PathConfig, Selector},
    tree::{Key, Map, Value},
};

impl PathConfig {
    /// Collects the value at `value_path` of every item.
    ///
    /// Without `key_path` the result is a list. With it, each value is stored
    /// under the item's value at `key_path`; a key that resolves to a
    /// container is skipped in favor of the next list index.
    pub fn pluck<'k>(
        &self,
        items: &Map,
        value_path: impl Into<Selector<'k>>,
        key_path: Option<&str>,
    ) -> Map {
        let value_path = value_path.into();
        let mut results = Map::with_capacity(items.len());
        for item in items.values() {
            let value = self.get(item, value_path.clone(), Value::Null);
            let key = key_path.and_then(|path| Key::from_value(&self.get(item, path, Value::Null)));
            match key {
                Some(key) => {
                    results.insert(key, value);
                }
                None => {
                    results.push(value);
                }
            }
        }
        results
    }

    /// Groups items into lists keyed by their value at `path`.
    ///
    /// Items whose value at `path` is a container can't be used as a key and
    /// are left out.
    pub fn group_by(&self, items: &Map, path: &str) -> Map {
        let mut groups = Map::new();
        for item in items.values() {
            let Some(key) = self.item_key(item, path) else {
                continue;
            };
            groups
                .slot(key.to_string())
                .coerce_map()
                .push(item.clone());
        }
        groups
    }

    /// Indexes items by their value at `path`; later items win.
    pub fn key_by(&self, items: &Map, path: &str) -> Map {
        let mut indexed = Map::new();
        for item in items.values() {
            if let Some(key) = self.item_key(item, path) {
                indexed.insert(key, item.clone());
            }
        }
        indexed
    }

    /// Sorts entries by their value at `path`, keeping keys attached.
    ///
    /// The sort is stable. Values order as `Null`, booleans, numbers, text,
    /// then containers.
    pub fn sort_by(&self, items: &Map, path: &str) -> Map {
        let mut entries: Vec<(Value, &Key, &Value)> = items
            .iter()
            .map(|(key, item)| (self.get(item, path, Value::Null), key, item))
            .collect();
        entries.sort_by(|(a, ..), (b, ..)| compare(a, b));
        entries
            .into_iter()
            .map(|(_, key, item)| (key.clone(), item.clone()))
            .collect()
    }

    fn item_key(&self, item: &Value, path: &str) -> Option<Key> {
        let value = self.get(item, path, Value::Null);
        let key = Key::from_value(&value);
        if key.is_none() {
            trace!(path, found = value.type_name(), "Item value can't be used as a key");
        }
        key
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
        Value::Map(_) | Value::Object(_) => 4,
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()),
        _ => match (a.as_float(), b.as_float()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}

/// Keeps only the top-level entries named in `keys`, in their original order.
pub fn only(map: &Map, keys: impl Keys) -> Map {
    let keys = keys.into_keys();
    map.iter()
        .filter(|(key, _)| keys.iter().any(|wanted| key.matches(wanted)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Drops the top-level entries named in `keys`.
pub fn except(map: &Map, keys: impl Keys) -> Map {
    let keys = keys.into_keys();
    map.iter()
        .filter(|(key, _)| !keys.iter().any(|wanted| key.matches(wanted)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Keeps the entries for which `predicate` returns true, keys included.
pub fn filter(map: &Map, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Map {
    map.iter()
        .filter(|(key, value)| predicate(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the first value for which `predicate` returns true.
pub fn first<'m>(map: &'m Map, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Option<&'m Value> {
    map.iter()
        .find(|(key, value)| predicate(value, key))
        .map(|(_, value)| value)
}

/// Returns the last value for which `predicate` returns true.
pub fn last<'m>(map: &'m Map, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Option<&'m Value> {
    map.iter()
        .rev()
        .find(|(key, value)| predicate(value, key))
        .map(|(_, value)| value)
}

/// Wraps a value into a map: `Null` becomes an empty list, a map is returned
/// as is, and anything else becomes a one-element list.
pub fn wrap(value: Value) -> Map {
    match value {
        Value::Null => Map::new(),
        Value::Map(map) => map,
        other => Map::list([other]),
    }
}

/// Collapses nested maps into a list of their leaves.
///
/// `depth` bounds how many levels are collapsed; use `usize::MAX` for all of
/// them. A depth of `0` collapses nothing and returns the items as a list.
/// Keys are discarded.
///
/// ```
/// # use dotted::tree::{Map, Value};
/// let nested = Map::list([Value::from(1), Value::from(vec![2, 3]), Value::from(vec![Value::from(vec![4])])]);
///
/// assert_eq!(dotted::flatten(&nested, usize::MAX), Map::list([1, 2, 3, 4]));
/// assert_eq!(dotted::flatten(&nested, 1).len(), 4);
/// assert!(dotted::flatten(&nested, 1).values().last().is_some_and(Value::is_map));
/// ```
pub fn flatten(map: &Map, depth: usize) -> Map {
    let mut result = Map::new();
    flatten_into(map, depth, &mut result);
    result
}

fn flatten_into(map: &Map, depth: usize, result: &mut Map) {
    for item in map.values() {
        match item {
            Value::Map(inner) if depth == 1 => {
                for value in inner.values() {
                    result.push(value.clone());
                }
            }
            Value::Map(inner) if depth > 1 => flatten_into(inner, depth - 1, result),
            other => {
                result.push(other.clone());
            }
        }
    }
}

/// Plucks the value at `value_path` from every item, optionally keyed by the
/// value at `key_path`.
///
/// ```
/// # use dotted::tree::{Map, Value};
/// let users = Value::from_json_str(r#"[{"id": 7, "name": "Ann"}, {"id": 9, "name": "Bob"}]"#)?;
/// let users = users.as_map().unwrap();
///
/// assert_eq!(dotted::pluck(users, "name", None), Map::list(["Ann", "Bob"]));
/// assert_eq!(dotted::pluck(users, "name", Some("id")).get("9"), Some(&Value::from("Bob")));
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn pluck<'k>(items: &Map, value_path: impl Into<Selector<'k>>, key_path: Option<&str>) -> Map {
    PathConfig::new().pluck(items, value_path, key_path)
}

/// Groups items by the value at a dotted `path`.
pub fn group_by(items: &Map, path: &str) -> Map {
    PathConfig::new().group_by(items, path)
}

/// Indexes items by the value at a dotted `path`.
pub fn key_by(items: &Map, path: &str) -> Map {
    PathConfig::new().key_by(items, path)
}

/// Sorts entries by the value at a dotted `path`.
pub fn sort_by(items: &Map, path: &str) -> Map {
    PathConfig::new().sort_by(items, path)
}
