use crate::{
    path::{Keys, PathConfig},
    tree::Value,
};

impl PathConfig {
    /// Returns true if every key in `keys` resolves in `tree`.
    ///
    /// An empty key list, a tree that is not a map, or an empty map all
    /// answer `false`. A stored `Null` counts as present.
    pub fn has(&self, tree: &Value, keys: impl Keys) -> bool {
        let keys = keys.into_keys();
        if keys.is_empty() || tree.as_map().is_none_or(|map| map.is_empty()) {
            return false;
        }
        keys.iter().all(|key| self.lookup(tree, key).is_some())
    }
}

/// Returns true if every dotted key in `keys` resolves in `tree`.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let tree = Value::from_json_str(r#"{"name": "John", "address": {"city": null}}"#)?;
///
/// assert!(dotted::has(&tree, "address.city"));
/// assert!(dotted::has(&tree, ["name", "address"]));
/// assert!(!dotted::has(&tree, ["name", "age"]));
/// assert!(!dotted::has(&tree, Vec::<String>::new()));
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn has(tree: &Value, keys: impl Keys) -> bool {
    PathConfig::new().has(tree, keys)
}
