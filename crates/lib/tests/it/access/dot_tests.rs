use dotted::{Map, PathConfig, Value};

use crate::helpers::*;

#[test]
fn test_undot_inverts_dot() {
    let original = sample_tree();
    let flat = dotted::dot(&original);

    assert!(flat.values().all(|value| !value.is_map() || value.is_empty_container()));
    // "config.debug" is already a dotted key, so it comes back nested
    let mut expected = original.clone();
    dotted::forget(&mut expected, "config.debug");
    dotted::set(&mut expected, "config.debug", true);
    assert_eq!(dotted::undot(flat), expected);
}

#[test]
fn test_dot_keys() {
    let flat = dotted::dot(&sample_tree());
    let keys: Vec<String> = flat.keys().map(ToString::to_string).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "nickname",
            "address.city",
            "address.geo.lat",
            "address.geo.lng",
            "users.0.email",
            "users.0.roles.0",
            "users.0.roles.1",
            "users.1.email",
            "users.1.roles.0",
            "config.debug",
        ]
    );
}

#[test]
fn test_empty_containers_stay_leaves() {
    let tree = tree(r#"{"tags": [], "meta": {"x": {}}}"#);
    let flat = dotted::dot(&tree);

    assert_eq!(flat.len(), 2);
    assert_eq!(flat.get("tags"), Some(&Value::Map(Map::new())));
    assert_eq!(flat.get("meta.x"), Some(&Value::Map(Map::new())));
    assert_eq!(dotted::undot(flat), tree);
}

#[test]
fn test_dot_with_prefix_and_config() {
    let tree = tree(r#"{"a": {"b": 1}}"#);
    assert!(dotted::dot_with_prefix(&tree, "env_").contains_key("env_a.b"));

    let config = PathConfig::new().with_delimiter(':');
    let flat = config.dot(&tree);
    assert!(flat.contains_key("a:b"));
    assert_eq!(config.undot(flat), tree);
}

#[test]
fn test_dot_of_leaf_is_empty() {
    assert!(dotted::dot(&Value::from("leaf")).is_empty());
    assert_eq!(dotted::undot(Map::new()), Value::Map(Map::new()));
}
