use dotted::{Map, Value};

use crate::helpers::*;

#[test]
fn test_write_then_read() {
    let paths = ["name", "address.city", "address.geo.alt", "users.1.email", "new.deep.path"];
    for path in paths {
        let mut tree = sample_tree();
        dotted::set(&mut tree, path, "written");
        assert_eq!(dotted::get(&tree, path, Value::Null), "written", "Round trip failed for '{path}'");
    }
}

#[test]
fn test_missing_paths_read_default() {
    let tree = sample_tree();
    for path in ["missing", "address.zip", "name.first", "users.5.email", "address..city"] {
        assert_eq!(dotted::get(&tree, path, "default"), "default", "Path '{path}' should miss");
        assert!(!dotted::has(&tree, path), "Path '{path}' should not be present");
    }
}

#[test]
fn test_read_paths() {
    let tree = sample_tree();
    assert_paths(
        &tree,
        &[
            ("name", Value::from("John")),
            ("nickname", Value::Null),
            ("address.geo.lng", Value::Float(-74.0)),
            ("users.0.roles.1", Value::from("dev")),
            ("config.debug", Value::Bool(true)),
        ],
    );
}

#[test]
fn test_literal_key_with_delimiter_wins() {
    let tree = tree(r#"{"a.b": 1, "a": {"b": 2}}"#);
    assert_eq!(dotted::get(&tree, "a.b", Value::Null), 1);

    let nested_only = tree_without_literal();
    assert_eq!(dotted::get(&nested_only, "a.b", Value::Null), 2);
}

fn tree_without_literal() -> Value {
    tree(r#"{"a": {"b": 2}}"#)
}

#[test]
fn test_whole_tree_selector() {
    let mut tree = sample_tree();
    assert_eq!(dotted::get(&tree, None::<&str>, Value::Null), tree.clone());

    dotted::set(&mut tree, None::<String>, list([1, 2]));
    assert_eq!(tree, list([1, 2]));
}

#[test]
fn test_set_builds_nested_maps() {
    let mut tree = Value::Map(Map::new());
    dotted::set(&mut tree, "address.city", "NYC");
    assert_eq!(tree, self::tree(r#"{"address": {"city": "NYC"}}"#));

    dotted::forget(&mut tree, "address.city");
    assert_eq!(tree, Value::Map(Map::new().with("address", Map::new())));
}

#[test]
fn test_set_replaces_leaf_intermediates() {
    let mut tree = sample_tree();
    dotted::set(&mut tree, "name.first", "John");
    assert_eq!(dotted::get(&tree, "name", Value::Null), self::tree(r#"{"first": "John"}"#));
}

#[test]
fn test_set_returns_tree_for_chaining() {
    let mut tree = Value::default();
    dotted::set(&mut tree, "a", 1);
    let root = dotted::set(&mut tree, "b", 2);
    assert_eq!(key_names(root), vec!["a", "b"]);
}

#[test]
fn test_objects_are_leaves_for_plain_get() {
    let mut tree = Value::default();
    dotted::set(&mut tree, "owner", dotted::Object::new().with("name", "Ann"));

    assert_eq!(dotted::get(&tree, "owner.name", "none"), "none");
    assert!(dotted::get(&tree, "owner", Value::Null).is_object());
}

#[test]
fn test_lazy_default() {
    let tree = sample_tree();
    let value = dotted::get_or_else(&tree, "missing", || list(["computed"]));
    assert_eq!(value, list(["computed"]));
}
