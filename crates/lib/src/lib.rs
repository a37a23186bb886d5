//!
//! Dotted: path addressing for nested, heterogeneous trees.
//! This library reads, writes, tests, removes, flattens and unflattens values deep inside a tree
//! using a single string key such as `"user.address.city"` or `"users.*.email"`.
//!
//! ## Core Concepts
//!
//! * **Values (`tree::Value`)**: Every node of a tree, either a leaf (null, bool, number, text) or a container.
//! * **Maps (`tree::Map`)**: Ordered containers keyed by integers or strings; the only nodes the plain operations traverse.
//! * **Objects (`tree::Object`)**: Attribute bags, traversed like maps by the polymorphic `data_*` accessors.
//! * **Paths (`path`)**: Keys split on a delimiter into segments, with `*` as the wildcard segment.
//! * **Access operations (`access`)**: `get`, `set`, `has`, `forget`, `dot`, `undot`, `data_get`, `data_set` and
//!   selection helpers, available as free functions and as methods on [`PathConfig`] for a custom path syntax.
//!
//! ## Example
//!
//! ```
//! use dotted::tree::Value;
//!
//! let mut tree = Value::default();
//! dotted::set(&mut tree, "address.city", "NYC");
//!
//! assert!(dotted::has(&tree, "address.city"));
//! assert_eq!(dotted::get(&tree, "address.city", Value::Null), "NYC");
//!
//! dotted::forget(&mut tree, "address.city");
//! assert!(!dotted::has(&tree, "address.city"));
//! assert!(dotted::get(&tree, "address", Value::Null).is_empty_container());
//! ```

pub mod access;
pub mod path;
pub mod tree;

pub use access::{
    data_fill, data_get, data_get_or_else, data_lookup, data_set, dot, dot_with_prefix, except,
    filter, first, flatten, forget, get, get_or_else, group_by, has, key_by, last, lookup,
    lookup_as, only, pluck, set, sort_by, undot, wrap,
};
pub use path::{Keys, PathConfig, Selector};
/// Re-export the tree types for easier access.
pub use tree::{Container, Key, Map, Object, Value};

/// Result type used throughout the Dotted library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Dotted library.
///
/// Addressing operations never fail; errors only come from type-checked
/// extraction and JSON interop.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A value had a different type than the one requested
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::TypeMismatch { .. } => "tree",
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this error came from JSON (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
