//! Path-based access operations.
//!
//! Every operation that takes a path is a method on
//! [`PathConfig`](crate::PathConfig) plus a free function using the default
//! path syntax. Two families exist:
//!
//! - The plain tree operations ([`get()`], [`set()`], [`has()`],
//!   [`forget()`], [`dot()`], [`undot()`]) traverse [`Map`](crate::Map) nodes
//!   only; any other node, objects included, is a leaf to them.
//! - The polymorphic accessors ([`data_get()`], [`data_set()`],
//!   [`data_fill()`]) traverse maps and objects alike and expand the wildcard
//!   segment.
//!
//! None of them fail: a path that doesn't resolve reads as the default and a
//! write creates whatever containers it needs.
//!
//! Recursion in [`dot()`], [`flatten()`] and wildcard fan-out follows the
//! depth of the input without a limit.

mod data;
mod flatten;
mod forget;
mod get;
mod has;
mod select;
mod set;

pub use data::{data_fill, data_get, data_get_or_else, data_lookup, data_set};
pub use flatten::{dot, dot_with_prefix, undot};
pub use forget::forget;
pub use get::{get, get_or_else, lookup, lookup_as};
pub use has::has;
pub use select::{except, filter, first, flatten, group_by, key_by, last, only, pluck, sort_by, wrap};
pub use set::set;
