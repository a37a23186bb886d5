//! Traversal over mixed node kinds with wildcard fan-out.
//!
//! These accessors address maps and objects alike through the
//! [`Container`](crate::Container) capability. A wildcard segment stands for
//! every direct child of the node it is applied to.

use tracing::trace;

use crate::{
    path::{PathConfig, Segment, Selector},
    tree::{Map, Value},
};

impl PathConfig {
    /// Resolves `key` in `target`, traversing maps and objects.
    ///
    /// A key that exists literally on the root container wins over its dotted
    /// interpretation. A wildcard segment collects the result of the remaining
    /// path for every child into a list map, with `Null` for children where
    /// it doesn't resolve; when another wildcard follows, the per-child lists
    /// are collapsed into one. A wildcard on a leaf doesn't resolve.
    pub fn data_lookup<'k>(&self, target: &Value, key: impl Into<Selector<'k>>) -> Option<Value> {
        let key = match key.into() {
            Selector::Whole => return Some(target.clone()),
            Selector::Key(key) => key,
        };

        if let Some(value) = target.as_container().and_then(|node| node.child(&key)) {
            return Some(value.clone());
        }
        resolve(target, &self.split(&key))
    }

    /// Reads the value at `key`, or `default` when the path doesn't resolve.
    pub fn data_get<'k>(
        &self,
        target: &Value,
        key: impl Into<Selector<'k>>,
        default: impl Into<Value>,
    ) -> Value {
        self.data_get_or_else(target, key, || default.into())
    }

    /// Reads the value at `key`, computing the default only on a miss.
    pub fn data_get_or_else<'k>(
        &self,
        target: &Value,
        key: impl Into<Selector<'k>>,
        default: impl FnOnce() -> Value,
    ) -> Value {
        let key = key.into();
        match self.data_lookup(target, key.clone()) {
            Some(value) => value,
            None => {
                trace!(?key, "Path did not resolve, using default");
                default()
            }
        }
    }

    /// Writes `value` at `key`, traversing maps and objects.
    ///
    /// Along the path, a child that is absent, `Null` or a leaf is replaced by
    /// an empty map, and a leaf target is replaced the same way. On the last
    /// segment the value is assigned when `overwrite` is true or the child is
    /// absent or `Null`.
    ///
    /// A wildcard segment applies the rest of the path to every existing
    /// child. A trailing wildcard replaces every child when `overwrite` is
    /// true and never adds keys.
    ///
    /// `Selector::Whole` replaces the target when `overwrite` is true or the
    /// target is `Null`.
    pub fn data_set<'t, 'k>(
        &self,
        target: &'t mut Value,
        key: impl Into<Selector<'k>>,
        value: impl Into<Value>,
        overwrite: bool,
    ) -> &'t mut Value {
        let value = value.into();
        match key.into() {
            Selector::Whole => {
                if overwrite || target.is_null() {
                    *target = value;
                }
            }
            Selector::Key(key) => assign(target, &self.split(&key), &value, overwrite),
        }
        target
    }

    /// Writes `value` at `key` only where nothing is set yet.
    ///
    /// Same as [`PathConfig::data_set`] with `overwrite` false.
    pub fn data_fill<'t, 'k>(
        &self,
        target: &'t mut Value,
        key: impl Into<Selector<'k>>,
        value: impl Into<Value>,
    ) -> &'t mut Value {
        self.data_set(target, key, value, false)
    }
}

fn resolve(target: &Value, segments: &[Segment<'_>]) -> Option<Value> {
    let mut current = target;
    for (index, segment) in segments.iter().enumerate() {
        let node = current.as_container()?;
        if segment.is_wildcard() {
            let rest = &segments[index + 1..];
            let results = node
                .children()
                .map(|child| resolve(child, rest).unwrap_or_default());

            let list = if rest.iter().any(Segment::is_wildcard) {
                Map::list(results.filter_map(|result| match result {
                    Value::Map(inner) => Some(inner.into_values()),
                    _ => None,
                }).flatten())
            } else {
                Map::list(results)
            };
            return Some(Value::Map(list));
        }
        current = node.child(segment.as_str())?;
    }
    Some(current.clone())
}

fn assign(target: &mut Value, segments: &[Segment<'_>], value: &Value, overwrite: bool) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let node = target.coerce_container();

    if segment.is_wildcard() {
        if !rest.is_empty() {
            for child in node.children_mut() {
                assign(child, rest, value, overwrite);
            }
        } else if overwrite {
            for child in node.children_mut() {
                *child = value.clone();
            }
        }
    } else if !rest.is_empty() {
        assign(node.slot(segment.as_str()), rest, value, overwrite);
    } else {
        match node.child_mut(segment.as_str()) {
            Some(child) if overwrite || child.is_null() => *child = value.clone(),
            Some(_) => {}
            None => node.set_child(segment.as_str(), value.clone()),
        }
    }
}

/// Reads a dotted `key` from a tree of maps and objects.
///
/// Returns `default` when the path doesn't resolve; `None` as the key returns
/// the whole target.
///
/// # Examples
///
/// ```
/// # use dotted::tree::{Object, Value};
/// let mut tree = Value::from_json_str(r#"{"users": [{"email": "a@x"}, {"email": "b@x"}]}"#)?;
/// dotted::set(&mut tree, "owner", Object::new().with("name", "Ann"));
///
/// assert_eq!(dotted::data_get(&tree, "owner.name", Value::Null), "Ann");
/// assert_eq!(dotted::get(&tree, "owner.name", "leaf"), "leaf");
/// assert_eq!(
///     dotted::data_get(&tree, "users.*.email", Value::Null),
///     Value::from(vec!["a@x", "b@x"])
/// );
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn data_get<'k>(target: &Value, key: impl Into<Selector<'k>>, default: impl Into<Value>) -> Value {
    PathConfig::new().data_get(target, key, default)
}

/// Reads a dotted `key` from a tree of maps and objects, calling `default`
/// only on a miss.
pub fn data_get_or_else<'k>(
    target: &Value,
    key: impl Into<Selector<'k>>,
    default: impl FnOnce() -> Value,
) -> Value {
    PathConfig::new().data_get_or_else(target, key, default)
}

/// Resolves a dotted `key` in a tree of maps and objects.
///
/// See [`PathConfig::data_lookup`].
pub fn data_lookup<'k>(target: &Value, key: impl Into<Selector<'k>>) -> Option<Value> {
    PathConfig::new().data_lookup(target, key)
}

/// Writes `value` at a dotted `key` in a tree of maps and objects.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let mut tree = Value::from_json_str(r#"{"users": [{"email": "a"}, {"email": "b"}]}"#)?;
///
/// dotted::data_set(&mut tree, "users.*.email", "x", false);
/// assert_eq!(tree.to_json_string()?, r#"{"users":[{"email":"a"},{"email":"b"}]}"#);
///
/// dotted::data_set(&mut tree, "users.*.email", "x", true);
/// assert_eq!(tree.to_json_string()?, r#"{"users":[{"email":"x"},{"email":"x"}]}"#);
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn data_set<'t, 'k>(
    target: &'t mut Value,
    key: impl Into<Selector<'k>>,
    value: impl Into<Value>,
    overwrite: bool,
) -> &'t mut Value {
    PathConfig::new().data_set(target, key, value, overwrite)
}

/// Writes `value` at a dotted `key` only where nothing is set yet.
pub fn data_fill<'t, 'k>(
    target: &'t mut Value,
    key: impl Into<Selector<'k>>,
    value: impl Into<Value>,
) -> &'t mut Value {
    PathConfig::new().data_fill(target, key, value)
}
