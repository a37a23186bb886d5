//! Conversion between nested trees and flat dotted-key maps.

use crate::{
    path::PathConfig,
    tree::{Map, Value},
};

impl PathConfig {
    /// Flattens `tree` into a single-level map keyed by full paths.
    ///
    /// Non-empty maps are expanded; every other value, empty maps included,
    /// is stored under its path as is. A tree that is not a map flattens to
    /// an empty map.
    pub fn dot(&self, tree: &Value) -> Map {
        self.dot_with_prefix(tree, "")
    }

    /// Flattens `tree`, prepending `prefix` verbatim to every key.
    pub fn dot_with_prefix(&self, tree: &Value, prefix: &str) -> Map {
        let mut flat = Map::new();
        if let Some(map) = tree.as_map() {
            self.dot_into(map, prefix, &mut flat);
        }
        flat
    }

    fn dot_into(&self, map: &Map, prefix: &str, flat: &mut Map) {
        for (key, value) in map {
            match value {
                Value::Map(child) if !child.is_empty() => {
                    let nested = format!("{prefix}{key}{}", self.delimiter());
                    self.dot_into(child, &nested, flat);
                }
                _ => {
                    flat.insert(format!("{prefix}{key}"), value.clone());
                }
            }
        }
    }

    /// Rebuilds a nested tree from a flat map produced by [`PathConfig::dot`].
    ///
    /// Entries are written with [`PathConfig::set`] in insertion order, so a
    /// later entry wins over an earlier one it collides with.
    pub fn undot(&self, flat: Map) -> Value {
        let mut tree = Value::Map(Map::new());
        for (key, value) in flat {
            self.set(&mut tree, key.to_string(), value);
        }
        tree
    }
}

/// Flattens `tree` into a map keyed by dotted paths.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let tree = Value::from_json_str(r#"{"user": {"name": "Ann", "tags": []}, "ids": [7, 8]}"#)?;
/// let flat = dotted::dot(&tree);
///
/// assert_eq!(flat.get("user.name"), Some(&Value::from("Ann")));
/// assert_eq!(flat.get("ids.1"), Some(&Value::Int(8)));
/// assert!(flat.get("user.tags").is_some_and(Value::is_empty_container));
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn dot(tree: &Value) -> Map {
    PathConfig::new().dot(tree)
}

/// Flattens `tree`, prepending `prefix` to every key.
pub fn dot_with_prefix(tree: &Value, prefix: &str) -> Map {
    PathConfig::new().dot_with_prefix(tree, prefix)
}

/// Rebuilds a nested tree from a map keyed by dotted paths.
pub fn undot(flat: Map) -> Value {
    PathConfig::new().undot(flat)
}
