//! Attribute-bag nodes.
//!
//! An [`Object`] is an entity with named attributes that are read and written
//! dynamically. The plain tree operations ([`get`](crate::get),
//! [`set`](crate::set), ...) treat an object as a leaf; the polymorphic
//! accessors ([`data_get`](crate::data_get), [`data_set`](crate::data_set))
//! traverse it like a map through the [`Container`](super::Container) trait.

use std::fmt;

use super::{Key, Map, Value};

/// A bag of named attributes.
///
/// # Examples
///
/// ```
/// # use dotted::tree::{Object, Value};
/// let mut user = Object::new().with("name", "Alice");
/// user.set("active", true).set("age", 30);
///
/// assert_eq!(user.get("name"), Some(&Value::from("Alice")));
/// assert_eq!(user.get_or("missing", "n/a"), Value::from("n/a"));
/// assert_eq!(user.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    attributes: Map,
}

impl Object {
    /// Creates an object without attributes
    pub fn new() -> Self {
        Self {
            attributes: Map::new(),
        }
    }

    /// Creates an object whose attributes are the entries of `attributes`
    pub fn from_attributes(attributes: Map) -> Self {
        Self { attributes }
    }

    /// Returns the value of attribute `name`
    pub fn get(&self, name: impl AsRef<str>) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns a mutable reference to attribute `name`
    pub fn get_mut(&mut self, name: impl AsRef<str>) -> Option<&mut Value> {
        self.attributes.get_mut(name)
    }

    /// Returns the value of attribute `name`, or `default` when unset
    pub fn get_or(&self, name: impl AsRef<str>, default: impl Into<Value>) -> Value {
        match self.attributes.get(name) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Sets attribute `name`, returning self for chaining
    pub fn set(&mut self, name: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name, value);
        self
    }

    /// Builder method to set an attribute and return self
    pub fn with(mut self, name: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Returns true if attribute `name` is set (a `Null` value counts as set)
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.attributes.contains_key(name)
    }

    /// Unsets attribute `name`, returning its previous value
    pub fn remove(&mut self, name: impl AsRef<str>) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Returns the number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attribute is set
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Borrows the attributes as a map
    pub fn attributes(&self) -> &Map {
        &self.attributes
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Map {
        &mut self.attributes
    }

    /// Consumes the object, returning its attributes
    pub fn into_attributes(self) -> Map {
        self.attributes
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object {}", self.attributes)
    }
}

impl From<Map> for Object {
    fn from(attributes: Map) -> Self {
        Object::from_attributes(attributes)
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Object::from_attributes(iter.into_iter().collect())
    }
}
