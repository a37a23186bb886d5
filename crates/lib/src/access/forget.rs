use tracing::trace;

use crate::{
    path::{Keys, PathConfig},
    tree::Value,
};

impl PathConfig {
    /// Removes every key in `keys` from `tree`, in place.
    ///
    /// A key that exists literally at the top level is removed directly.
    /// Otherwise the walk towards the parent of the last segment abandons the
    /// key at the first missing or non-map node; the remaining keys are still
    /// processed. Removing an absent key does nothing.
    pub fn forget(&self, tree: &mut Value, keys: impl Keys) {
        let Some(root) = tree.as_map_mut() else {
            return;
        };

        'keys: for key in keys.into_keys() {
            if root.remove(&key).is_some() {
                continue;
            }

            let segments = self.split(&key);
            let Some((last, parents)) = segments.split_last() else {
                continue;
            };

            let mut current = &mut *root;
            for segment in parents {
                match current.get_mut(segment.as_str()) {
                    Some(Value::Map(child)) => current = child,
                    _ => {
                        trace!(key = %key, segment = %segment, "Path not found, nothing to forget");
                        continue 'keys;
                    }
                }
            }
            current.remove(last.as_str());
        }
    }
}

/// Removes one or more dotted keys from `tree`, in place.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Value;
/// let mut tree = Value::from_json_str(r#"{"address": {"city": "NYC", "zip": "10001"}, "a.b": 1}"#)?;
/// dotted::forget(&mut tree, ["address.city", "a.b", "missing.key"]);
///
/// assert_eq!(tree.to_json_string()?, r#"{"address":{"zip":"10001"}}"#);
/// # Ok::<(), dotted::Error>(())
/// ```
pub fn forget(tree: &mut Value, keys: impl Keys) {
    PathConfig::new().forget(tree, keys)
}
