//! The capability shared by traversable nodes.
//!
//! [`Map`] and [`Object`] both implement [`Container`], so traversal code that
//! has to handle either kind of node is written once against
//! `&dyn Container` / `&mut dyn Container`.

use super::{Map, Object, Value};

/// A node whose children can be addressed by a path segment.
pub trait Container {
    /// Human readable name of the node kind, for diagnostics
    fn kind(&self) -> &'static str;

    /// Returns the child addressed by `segment`
    fn child(&self, segment: &str) -> Option<&Value>;

    /// Returns a mutable reference to the child addressed by `segment`
    fn child_mut(&mut self, segment: &str) -> Option<&mut Value>;

    /// Stores `value` as the child addressed by `segment`
    fn set_child(&mut self, segment: &str, value: Value);

    /// Returns the child addressed by `segment`, creating it as `Null` first
    /// when it is absent
    fn slot(&mut self, segment: &str) -> &mut Value;

    /// Iterates over the direct children in order
    fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_>;

    /// Iterates mutably over the direct children in order
    fn children_mut(&mut self) -> Box<dyn Iterator<Item = &mut Value> + '_>;

    /// Number of direct children
    fn child_count(&self) -> usize;
}

impl Container for Map {
    fn kind(&self) -> &'static str {
        "map"
    }

    fn child(&self, segment: &str) -> Option<&Value> {
        self.get(segment)
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Value> {
        self.get_mut(segment)
    }

    fn set_child(&mut self, segment: &str, value: Value) {
        self.insert(segment, value);
    }

    fn slot(&mut self, segment: &str) -> &mut Value {
        Map::slot(self, segment)
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.values())
    }

    fn children_mut(&mut self) -> Box<dyn Iterator<Item = &mut Value> + '_> {
        Box::new(self.values_mut())
    }

    fn child_count(&self) -> usize {
        self.len()
    }
}

impl Container for Object {
    fn kind(&self) -> &'static str {
        "object"
    }

    fn child(&self, segment: &str) -> Option<&Value> {
        self.get(segment)
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Value> {
        self.get_mut(segment)
    }

    fn set_child(&mut self, segment: &str, value: Value) {
        self.set(segment, value);
    }

    fn slot(&mut self, segment: &str) -> &mut Value {
        self.attributes_mut().slot(segment)
    }

    fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.attributes().values())
    }

    fn children_mut(&mut self) -> Box<dyn Iterator<Item = &mut Value> + '_> {
        Box::new(self.attributes_mut().values_mut())
    }

    fn child_count(&self) -> usize {
        self.len()
    }
}
