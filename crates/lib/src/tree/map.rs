//! Ordered map nodes.
//!
//! [`Map`] is the traversable container of the tree. It keeps its entries in
//! insertion order: replacing the value of an existing key keeps the key's
//! position, and removing a key keeps the relative order of the others. A map
//! whose keys are exactly `0..len` in order doubles as a list.

use std::fmt;

use indexmap::IndexMap;
use tracing::warn;

use super::{Key, Value, key::KeyRef};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Lookups take the string form of a key, which is what path segments are:
///
/// ```
/// # use dotted::tree::{Map, Value};
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert(0, "first");
///
/// assert_eq!(map.get("name"), Some(&Value::from("Alice")));
/// assert_eq!(map.get("0"), Some(&Value::from("first")));
/// assert_eq!(map.keys().map(|k| k.to_string()).collect::<Vec<_>>(), vec!["name", "0"]);
/// ```
///
/// Equality compares entries in order.
#[derive(Debug, Clone)]
pub struct Map {
    entries: IndexMap<Key, Value>,
    /// Key used by the next [`Map::push`]; `None` once `i64::MAX` is taken
    next_index: Option<i64>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Builds a list map (keys `0..n`) from the given values
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter();
        let mut map = Map::with_capacity(values.size_hint().0);
        for value in values {
            map.push(value);
        }
        map
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the keys are exactly `0, 1, .., len - 1` in order.
    ///
    /// The empty map is a list.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(index, key)| i64::try_from(index).is_ok_and(|index| *key == Key::Int(index)))
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(&KeyRef::parse(key.as_ref()))
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(&KeyRef::parse(key.as_ref()))
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.entries.get_mut(&KeyRef::parse(key.as_ref()))
    }

    /// Gets the value stored under an already built [`Key`]
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts a value, returning the previous value of the key if present.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        self.reserve_index(&key);
        self.entries.insert(key, value.into())
    }

    /// Appends a value under the next integer key and returns that key.
    ///
    /// The next key is one past the largest integer key the map has held, or
    /// `0` when it never held one. Once `i64::MAX` has been used there is no
    /// next key: the value is dropped and `None` is returned.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let Some(next) = self.next_index else {
            warn!("Integer keys exhausted, value not appended");
            return None;
        };
        let key = Key::Int(next);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Removes `key`, returning its value if it was present
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.shift_remove(&KeyRef::parse(key.as_ref()))
    }

    /// Returns a mutable reference to the value under `key`, inserting
    /// `Value::Null` first when the key is absent.
    pub fn slot(&mut self, key: impl AsRef<str>) -> &mut Value {
        let key = key.as_ref();
        let index = match self.entries.get_index_of(&KeyRef::parse(key)) {
            Some(index) => index,
            None => {
                let key = Key::parse(key);
                self.reserve_index(&key);
                self.entries.insert_full(key, Value::Null).0
            }
        };
        &mut self.entries[index]
    }

    fn reserve_index(&mut self, key: &Key) {
        if let (Key::Int(n), Some(next)) = (key, self.next_index) {
            if *n >= next {
                self.next_index = n.checked_add(1);
            }
        }
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = Some(0);
    }

    /// Returns the first entry in insertion order
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry in insertion order
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates mutably over entries in insertion order
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Iterates over keys in insertion order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates mutably over values in insertion order
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Consumes the map, yielding its values in insertion order
    pub fn into_values(self) -> impl DoubleEndedIterator<Item = Value> {
        self.entries.into_values()
    }

    /// Keeps only the entries for which `f` returns true
    pub fn retain(&mut self, mut f: impl FnMut(&Key, &Value) -> bool) {
        self.entries.retain(|key, value| f(key, value))
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for Map
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
