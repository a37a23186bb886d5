//! Map keys.
//!
//! A map node is keyed either by an integer or by a string. Strings that are
//! the canonical decimal spelling of an integer are always stored as the
//! integer, so the path segment `"0"` and the key `0` address the same entry.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use indexmap::Equivalent;

use super::Value;

/// A key of a [`Map`](super::Map) entry.
///
/// # Examples
///
/// ```
/// # use dotted::tree::Key;
/// assert_eq!(Key::from("42"), Key::Int(42));
/// assert_eq!(Key::from("042"), Key::Str("042".to_string()));
/// assert!(Key::from(7).matches("7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// Integer key, as produced by list pushes or numeric path segments
    Int(i64),
    /// Any other key
    Str(String),
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Int(n) => KeyRef::Int(*n).hash(state),
            Key::Str(s) => KeyRef::Str(s).hash(state),
        }
    }
}

/// Borrowed form of a [`Key`], for lookups by path segment.
///
/// Hashes exactly like the owned key it is equivalent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum KeyRef<'a> {
    Int(i64),
    Str(&'a str),
}

impl<'a> KeyRef<'a> {
    /// Normalizes a segment the same way [`Key::parse`] does, without allocating
    pub(crate) fn parse(s: &'a str) -> Self {
        match canonical_int(s) {
            Some(n) => KeyRef::Int(n),
            None => KeyRef::Str(s),
        }
    }
}

impl Equivalent<Key> for KeyRef<'_> {
    fn equivalent(&self, key: &Key) -> bool {
        match (self, key) {
            (KeyRef::Int(a), Key::Int(b)) => a == b,
            (KeyRef::Str(a), Key::Str(b)) => *a == b,
            _ => false,
        }
    }
}

/// Parses `s` as an integer only when it is the canonical spelling of one.
///
/// Leading zeros, a leading `+`, `-0` and out-of-range values are rejected.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && s.len() > 1 {
        return None;
    }
    s.parse().ok()
}

impl Key {
    /// Builds a key from its string form, normalizing integer spellings.
    pub fn parse(s: &str) -> Self {
        match canonical_int(s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s.to_string()),
        }
    }

    /// Returns true if the path segment `segment` addresses this key.
    ///
    /// This compares without allocating: string keys never hold a canonical
    /// integer spelling, so a plain string comparison is enough for them.
    pub fn matches(&self, segment: &str) -> bool {
        KeyRef::parse(segment).equivalent(self)
    }

    /// Returns the integer value of an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the string of a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Derives a key from a stored value, the way indexing by a looked-up
    /// value works in [`pluck`](crate::pluck) and friends.
    ///
    /// Text is parsed, booleans become `0`/`1`, floats are truncated and
    /// `Null` becomes the empty string. Containers cannot be keys.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Float(f) if f.is_finite() => Some(Key::Int(f.trunc() as i64)),
            Value::Text(s) => Some(Key::parse(s)),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(n) => Key::Int(n),
            None => Key::Str(value),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
