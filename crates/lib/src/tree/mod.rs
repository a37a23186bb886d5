//! The tree data model.
//!
//! A tree is a [`Value`]: either a leaf or one of two container kinds.
//!
//! # Core Types
//!
//! - [`Value`] - A node of the tree
//! - [`Map`] - Insertion-ordered map node keyed by [`Key`]
//! - [`Object`] - Attribute-bag node
//! - [`Container`] - The capability both container kinds share

pub mod container;
pub mod json;
pub mod key;
pub mod map;
pub mod object;
pub mod value;

pub use container::Container;
pub use key::Key;
pub use map::Map;
pub use object::Object;
pub use value::Value;
