//! Path splitting and syntax configuration tests

use dotted::{
    PathConfig, Value,
    path::{Segment, split},
};

use crate::helpers::*;

#[test]
fn test_split_round_trips_through_join() {
    let config = PathConfig::default();
    for key in ["a", "a.b.c", "users.*.email", "a..b", ".lead", "trail."] {
        let parts: Vec<&str> = config.split(key).iter().map(Segment::as_str).collect();
        assert_eq!(parts.join("."), key);
    }
    assert_eq!(split("no_delimiter").len(), 1);
}

#[test]
fn test_custom_wildcard_only_matches_configured_literal() {
    let config = PathConfig::new().with_wildcard("[]");
    let tree = tree(r#"{"items": [{"id": 1}, {"id": 2}], "*": {"id": 3}}"#);

    assert_eq!(config.data_get(&tree, "items.[].id", Value::Null), list([1, 2]));
    assert_eq!(config.data_get(&tree, "*.id", Value::Null), 3);
}

#[test]
fn test_config_from_settings_file() {
    let config: PathConfig = serde_json::from_str(r#"{"delimiter": "/", "wildcard": "+"}"#)
        .expect("Failed to parse config");

    let mut tree = Value::default();
    config.set(&mut tree, "server/port", 8080);
    config.data_set(&mut tree, "server/+", 9090, true);

    assert_eq!(config.get(&tree, "server/port", Value::Null), 9090);
    assert!(config.has(&tree, "server/port"));
    assert!(!dotted::has(&tree, "server/port"));

    let round_trip: PathConfig =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(round_trip, config);
}

#[test]
fn test_path_macro_builds_keys() {
    let tree = sample_tree();
    let index = 1;
    let key = dotted::path!("users", index, "email");
    assert_eq!(dotted::get(&tree, key.as_str(), Value::Null), "b@example.com");
}
