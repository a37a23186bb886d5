//! Read-only traversal.

use tracing::trace;

use crate::{
    path::{PathConfig, Selector},
    tree::Value,
};

impl PathConfig {
    /// Resolves `key` in `tree`, borrowing the node it addresses.
    ///
    /// A key that exists literally at the top level of `tree` wins over its
    /// dotted interpretation. Otherwise each segment descends one map level;
    /// a missing segment or a node that is not a map ends the walk with
    /// `None`. A stored `Null` at the end of the path is returned as
    /// `Some(&Value::Null)`.
    pub fn lookup<'t, 'k>(&self, tree: &'t Value, key: impl Into<Selector<'k>>) -> Option<&'t Value> {
        let key = match key.into() {
            Selector::Whole => return Some(tree),
            Selector::Key(key) => key,
        };

        let root = tree.as_map()?;
        if let Some(value) = root.get(&*key) {
            return Some(value);
        }

        let mut current = tree;
        for segment in self.split(&key) {
            current = current.as_map()?.get(segment.as_str())?;
        }
        Some(current)
    }

    /// Reads the value at `key`, or `default` when the path doesn't resolve.
    pub fn get<'k>(
        &self,
        tree: &Value,
        key: impl Into<Selector<'k>>,
        default: impl Into<Value>,
    ) -> Value {
        self.get_or_else(tree, key, || default.into())
    }

    /// Reads the value at `key`, computing the default only on a miss.
    pub fn get_or_else<'k>(
        &self,
        tree: &Value,
        key: impl Into<Selector<'k>>,
        default: impl FnOnce() -> Value,
    ) -> Value {
        let key = key.into();
        match self.lookup(tree, key.clone()) {
            Some(value) => value.clone(),
            None => {
                trace!(?key, "Path did not resolve, using default");
                default()
            }
        }
    }
}

/// Resolves `key` in `tree` with the default path syntax.
///
/// See [`PathConfig::lookup`].
pub fn lookup<'t, 'k>(tree: &'t Value, key: impl Into<Selector<'k>>) -> Option<&'t Value> {
    PathConfig::new().lookup(tree, key)
}

/// Reads the value at a dotted `key`, or `default` when it is missing.
///
/// `None` as the key returns the whole tree. A key that exists literally at
/// the top level wins over its dotted interpretation.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let tree = Value::from_json_str(r#"{"name": "John", "address": {"city": "NYC"}, "a.b": 1}"#)?;
///
/// assert_eq!(dotted::get(&tree, "address.city", Value::Null), "NYC");
/// assert_eq!(dotted::get(&tree, "a.b", Value::Null), 1);
/// assert_eq!(dotted::get(&tree, "missing", "default"), "default");
/// assert_eq!(dotted::get(&tree, None::<&str>, Value::Null), tree);
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn get<'k>(tree: &Value, key: impl Into<Selector<'k>>, default: impl Into<Value>) -> Value {
    PathConfig::new().get(tree, key, default)
}

/// Reads the value at `key`, calling `default` only when it is missing.
pub fn get_or_else<'k>(
    tree: &Value,
    key: impl Into<Selector<'k>>,
    default: impl FnOnce() -> Value,
) -> Value {
    PathConfig::new().get_or_else(tree, key, default)
}

/// Resolves `key` and converts the node with `TryFrom`.
///
/// Returns `None` when the path is missing or the conversion fails.
pub fn lookup_as<'t, 'k, T>(tree: &'t Value, key: impl Into<Selector<'k>>) -> Option<T>
where
    T: TryFrom<&'t Value, Error = crate::Error>,
{
    lookup(tree, key).and_then(|value| T::try_from(value).ok())
}
