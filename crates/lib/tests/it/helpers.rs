use dotted::{Map, Value};

/// Parse a JSON literal into a tree, panicking on malformed test input
pub fn tree(json: &str) -> Value {
    Value::from_json_str(json).expect("Failed to parse test tree")
}

/// The tree used across the access tests
pub fn sample_tree() -> Value {
    tree(
        r#"{
            "name": "John",
            "nickname": null,
            "address": {"city": "NYC", "geo": {"lat": 40.7, "lng": -74.0}},
            "users": [
                {"email": "a@example.com", "roles": ["admin", "dev"]},
                {"email": "b@example.com", "roles": ["dev"]}
            ],
            "config.debug": true
        }"#,
    )
}

/// Collect the keys of a map node as strings, in order
pub fn key_names(value: &Value) -> Vec<String> {
    value
        .as_map()
        .map(|map| map.keys().map(ToString::to_string).collect())
        .unwrap_or_default()
}

/// Assert that every path resolves to the expected value
pub fn assert_paths(tree: &Value, expected: &[(&str, Value)]) {
    for (path, expected_value) in expected {
        assert_eq!(
            dotted::get(tree, *path, Value::Null),
            *expected_value,
            "Value mismatch for path '{path}'"
        );
    }
}

/// Build a list map of values
pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Value {
    Value::Map(Map::list(values))
}
