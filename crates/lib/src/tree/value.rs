//! Value types for addressable trees.
//!
//! This module provides the [`Value`] enum that represents every node of a
//! tree. Values are either leaves (null, booleans, numbers, text) or
//! containers: ordered [`Map`] nodes and attribute-bag [`Object`] nodes.

use std::fmt;

use tracing::debug;

use super::{Container, Map, Object};
use crate::Error;

/// A node of an addressable tree.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - Represents null/unset values
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Container Values
/// - [`Value::Map`] - Ordered map keyed by integers or strings
/// - [`Value::Object`] - Bag of named attributes
///
/// Only maps are traversed by the plain tree operations; objects are
/// traversed by the polymorphic `data_*` accessors.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use dotted::tree::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(42 == number);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/unset value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered map node
    Map(Map),
    /// Attribute-bag node
    Object(Object),
}

impl Value {
    /// Returns true if this is a leaf value (not a container)
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this value can be traversed by the `data_*` accessors
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Object(_))
    }

    /// Returns true if this is a map node
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this is an attribute-bag node
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to an object (returns immutable reference)
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable object reference
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Views a map or object node through the [`Container`] capability
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::as_container`]
    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns true for an empty map or object.
    ///
    /// Leaves are never empty containers.
    pub fn is_empty_container(&self) -> bool {
        self.as_container().is_some_and(|c| c.child_count() == 0)
    }

    /// Turns this value into a map unless it already is one.
    ///
    /// Any other value, objects included, is replaced by an empty map.
    pub fn coerce_map(&mut self) -> &mut Map {
        if !self.is_map() {
            if !self.is_null() {
                debug!(replaced = self.type_name(), "Replacing value with an empty map");
            }
            *self = Value::Map(Map::new());
        }
        match self {
            Value::Map(map) => map,
            _ => unreachable!(),
        }
    }

    /// Turns this value into a container unless it already is one.
    ///
    /// Maps and objects are kept; leaves are replaced by an empty map.
    pub fn coerce_container(&mut self) -> &mut dyn Container {
        if !self.is_container() {
            if !self.is_null() {
                debug!(replaced = self.type_name(), "Replacing leaf with an empty map");
            }
            *self = Value::Map(Map::new());
        }
        match self {
            Value::Map(map) => map,
            Value::Object(object) => object,
            _ => unreachable!(),
        }
    }

    /// Gets a value by dotted path with automatic type conversion using TryFrom
    ///
    /// Returns None if the path doesn't resolve or the conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotted::tree::Value;
    /// let tree = Value::from_json_str(r#"{"user": {"name": "Alice", "age": 30}}"#).unwrap();
    ///
    /// assert_eq!(tree.get_as::<&str>("user.name"), Some("Alice"));
    /// assert_eq!(tree.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(tree.get_as::<i64>("user.name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = Error>,
    {
        let value = crate::lookup(self, path)?;
        T::try_from(value).ok()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::Object(object) => write!(f, "{object}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        // Clamp rather than wrap on 64-bit overflow
        Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Map(Map::list(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn mismatch(expected: &str, value: &Value) -> Error {
    Error::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

// TryFrom implementations for type-checked extraction
impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("text", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(mismatch("text", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(mismatch("int", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(mismatch("bool", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Map {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_map().ok_or_else(|| mismatch("map", value))
    }
}

impl TryFrom<&Value> for Map {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(mismatch("map", value)),
        }
    }
}

impl TryFrom<&Value> for Object {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(object.clone()),
            _ => Err(mismatch("object", value)),
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == i64::from(*other),
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(x) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
