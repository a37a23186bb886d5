//! Path keys and their segments.
//!
//! A path key such as `"user.address.city"` addresses a node in a tree by the
//! sequence of keys leading to it. This module splits keys into [`Segment`]s
//! and defines the argument types the access operations accept.
//!
//! # Core Types
//!
//! - [`PathConfig`] - The delimiter and wildcard literal in use
//! - [`Segment`] - One component of a split key
//! - [`Selector`] - A key, or the whole tree
//! - [`Keys`] - One key or a list of keys
//!
//! # Usage
//!
//! ```rust
//! use dotted::path::{PathConfig, Segment, split};
//!
//! assert_eq!(
//!     split("users.*.email"),
//!     vec![Segment::Key("users"), Segment::Wildcard("*"), Segment::Key("email")]
//! );
//!
//! // Empty segments are kept
//! assert_eq!(split("a..b").len(), 3);
//!
//! let config = PathConfig::new().with_delimiter('/');
//! assert_eq!(config.split("a/b"), vec![Segment::Key("a"), Segment::Key("b")]);
//! ```

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::tree::Key;

/// Delimiter used by [`PathConfig::default`]
pub const DEFAULT_DELIMITER: char = '.';

/// Wildcard literal used by [`PathConfig::default`]
pub const DEFAULT_WILDCARD: &str = "*";

/// One component of a split path key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// An ordinary key segment (possibly empty)
    Key(&'a str),
    /// The wildcard segment, meaning "every direct child"
    Wildcard(&'a str),
}

impl<'a> Segment<'a> {
    /// Returns the raw text of the segment
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Key(s) | Segment::Wildcard(s) => s,
        }
    }

    /// Returns true for the wildcard segment
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The syntax of path keys: which character separates segments and which
/// segment is the wildcard.
///
/// Every access operation is available as a method on `PathConfig`; the free
/// functions at the crate root use [`PathConfig::default`]. The config is
/// `serde`-enabled so it can live inside an application's own settings.
///
/// ```
/// # use dotted::{PathConfig, tree::Value};
/// let config = PathConfig::new().with_delimiter(':');
/// let mut tree = Value::default();
/// config.set(&mut tree, "server:port", 8080);
///
/// assert_eq!(config.get(&tree, "server:port", Value::Null), Value::Int(8080));
/// assert_eq!(dotted::get(&tree, "server:port", "unset"), Value::from("unset"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    delimiter: char,
    wildcard: Cow<'static, str>,
}

impl PathConfig {
    /// Creates the default configuration (`.` delimiter, `*` wildcard)
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            wildcard: Cow::Borrowed(DEFAULT_WILDCARD),
        }
    }

    /// Builder method to change the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method to change the wildcard literal
    pub fn with_wildcard(mut self, wildcard: impl Into<String>) -> Self {
        self.wildcard = Cow::Owned(wildcard.into());
        self
    }

    /// Returns the delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the wildcard literal
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Splits `key` into segments.
    ///
    /// Splitting never collapses empty segments, and a key without the
    /// delimiter yields exactly one segment.
    pub fn split<'k>(&self, key: &'k str) -> Vec<Segment<'k>> {
        key.split(self.delimiter)
            .map(|part| {
                if part == self.wildcard() {
                    Segment::Wildcard(part)
                } else {
                    Segment::Key(part)
                }
            })
            .collect()
    }

    /// Joins a prefix and a key with the delimiter
    pub fn join(&self, prefix: &str, key: impl fmt::Display) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}{}{key}", self.delimiter)
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `key` with the default configuration.
pub fn split(key: &str) -> Vec<Segment<'_>> {
    PathConfig::new().split(key)
}

/// What an operation addresses: a path key, or the whole tree.
///
/// Plain strings and integers convert into `Selector::Key`; `None` converts
/// into `Selector::Whole`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<'a> {
    /// The entire tree
    Whole,
    /// A path key, split on the delimiter when needed
    Key(Cow<'a, str>),
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(key: &'a str) -> Self {
        Selector::Key(Cow::Borrowed(key))
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    fn from(key: &'a String) -> Self {
        Selector::Key(Cow::Borrowed(key.as_str()))
    }
}

impl From<String> for Selector<'_> {
    fn from(key: String) -> Self {
        Selector::Key(Cow::Owned(key))
    }
}

impl From<i64> for Selector<'_> {
    fn from(key: i64) -> Self {
        Selector::Key(Cow::Owned(key.to_string()))
    }
}

impl From<usize> for Selector<'_> {
    fn from(key: usize) -> Self {
        Selector::Key(Cow::Owned(key.to_string()))
    }
}

impl From<&Key> for Selector<'_> {
    fn from(key: &Key) -> Self {
        Selector::Key(Cow::Owned(key.to_string()))
    }
}

impl<'a, T: Into<Selector<'a>>> From<Option<T>> for Selector<'a> {
    fn from(key: Option<T>) -> Self {
        key.map_or(Selector::Whole, Into::into)
    }
}

/// One key or a list of keys, for the operations that accept either.
///
/// ```
/// # use dotted::path::Keys;
/// assert_eq!("a.b".into_keys(), vec!["a.b".to_string()]);
/// assert_eq!(["a", "b"].into_keys(), vec!["a".to_string(), "b".to_string()]);
/// assert!(Vec::<String>::new().into_keys().is_empty());
/// ```
pub trait Keys {
    /// Normalizes into a list of keys
    fn into_keys(self) -> Vec<String>;
}

impl Keys for &str {
    fn into_keys(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl Keys for String {
    fn into_keys(self) -> Vec<String> {
        vec![self]
    }
}

impl Keys for &String {
    fn into_keys(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>> Keys for &[S] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|key| key.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> Keys for [S; N] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|key| key.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> Keys for &[S; N] {
    fn into_keys(self) -> Vec<String> {
        self.as_slice().into_keys()
    }
}

impl<S: AsRef<str>> Keys for Vec<S> {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|key| key.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> Keys for &Vec<S> {
    fn into_keys(self) -> Vec<String> {
        self.as_slice().into_keys()
    }
}

/// Builds a dotted path key from its components.
///
/// Components are anything implementing `Display`; they are joined with the
/// default delimiter without any normalization.
///
/// # Examples
///
/// ```rust
/// # use dotted::path;
/// let index = 3;
/// assert_eq!(path!("users", index, "email"), "users.3.email");
/// assert_eq!(path!("name"), "name");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = ::std::string::ToString::to_string(&$first);
        $(
            path.push($crate::path::DEFAULT_DELIMITER);
            path.push_str(&::std::string::ToString::to_string(&$rest));
        )*
        path
    }};
}
