//! Writing with auto-vivification.

use crate::{
    path::{PathConfig, Selector},
    tree::Value,
};

impl PathConfig {
    /// Writes `value` at `key`, creating intermediate maps as needed.
    ///
    /// Every intermediate that is absent or not a map is replaced by an empty
    /// map, so the write always succeeds. A root that is not a map is replaced
    /// the same way. `Selector::Whole` replaces the entire tree.
    pub fn set<'t, 'k>(
        &self,
        tree: &'t mut Value,
        key: impl Into<Selector<'k>>,
        value: impl Into<Value>,
    ) -> &'t mut Value {
        let value = value.into();
        let key = match key.into() {
            Selector::Whole => {
                *tree = value;
                return tree;
            }
            Selector::Key(key) => key,
        };

        let segments = self.split(&key);
        let Some((last, parents)) = segments.split_last() else {
            return tree;
        };

        let mut current = tree.coerce_map();
        for segment in parents {
            current = current.slot(segment.as_str()).coerce_map();
        }
        current.insert(last.as_str(), value);
        tree
    }
}

/// Writes `value` at a dotted `key`, creating intermediate maps as needed.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let mut tree = Value::default();
/// dotted::set(&mut tree, "address.city", "NYC");
///
/// assert_eq!(tree.to_json_string()?, r#"{"address":{"city":"NYC"}}"#);
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn set<'t, 'k>(
    tree: &'t mut Value,
    key: impl Into<Selector<'k>>,
    value: impl Into<Value>,
) -> &'t mut Value {
    PathConfig::new().set(tree, key, value)
}
