use dotted::{Map, Object, Value};

use crate::helpers::*;

fn users() -> Value {
    tree(r#"{"users": [{"email": "a"}, {"email": "b"}]}"#)
}

#[test]
fn test_wildcard_set_overwrites_every_child() {
    let mut tree = users();
    dotted::data_set(&mut tree, "users.*.email", "x", true);
    assert_eq!(
        dotted::data_get(&tree, "users.*.email", Value::Null),
        list(["x", "x"])
    );
}

#[test]
fn test_wildcard_set_without_overwrite_keeps_values() {
    let mut tree = users();
    dotted::data_set(&mut tree, "users.*.email", "x", false);
    assert_eq!(tree, users());

    dotted::data_fill(&mut tree, "users.*.name", "anon");
    assert_eq!(
        dotted::data_get(&tree, "users.*.name", Value::Null),
        list(["anon", "anon"])
    );
}

#[test]
fn test_mixed_maps_and_objects() {
    let mut tree = Value::Map(Map::list([
        Value::Object(Object::new().with("profile", Map::new().with("name", "Ann"))),
        Value::Map(Map::new().with("profile", Object::new().with("name", "Bob"))),
    ]));

    assert_eq!(
        dotted::data_get(&tree, "*.profile.name", Value::Null),
        list(["Ann", "Bob"])
    );

    dotted::data_set(&mut tree, "*.profile.active", true, true);
    assert_eq!(dotted::data_get(&tree, "0.profile.active", Value::Null), true);
    assert_eq!(dotted::data_get(&tree, "1.profile.active", Value::Null), true);
    assert!(dotted::data_get(&tree, "0", Value::Null).is_object());
    assert!(dotted::data_get(&tree, "1.profile", Value::Null).is_object());
}

#[test]
fn test_auto_vivification_through_leaves() {
    let mut tree = tree(r#"{"a": 1, "b": null}"#);
    dotted::data_set(&mut tree, "a.x", 1, true);
    dotted::data_set(&mut tree, "b.y.z", 2, false);

    assert_eq!(tree, self::tree(r#"{"a": {"x": 1}, "b": {"y": {"z": 2}}}"#));
}

#[test]
fn test_data_get_matches_get_on_maps() {
    let tree = sample_tree();
    for path in ["name", "nickname", "address.geo.lat", "users.1.roles.0", "config.debug", "missing"] {
        assert_eq!(
            dotted::data_get(&tree, path, "default"),
            dotted::get(&tree, path, "default"),
            "data_get and get disagree on '{path}'"
        );
    }
}

#[test]
fn test_nested_wildcards_collapse() {
    let tree = sample_tree();
    assert_eq!(
        dotted::data_get(&tree, "users.*.roles.*", Value::Null),
        list(["admin", "dev", "dev"])
    );
}

#[test]
fn test_data_lookup_owned_result() {
    let tree = sample_tree();
    assert_eq!(dotted::data_lookup(&tree, "address.city"), Some(Value::from("NYC")));
    assert_eq!(dotted::data_lookup(&tree, "address.zip"), None);
    assert_eq!(dotted::data_lookup(&tree, "name.*"), None);
}

#[test]
fn test_lazy_default_not_called_on_hit() {
    let tree = sample_tree();
    let value = dotted::data_get_or_else(&tree, "name", || panic!("default evaluated on a hit"));
    assert_eq!(value, "John");
}
