use dotted::{Error, Map, Object, Value};

use crate::helpers::*;

#[test]
fn test_type_checked_extraction() {
    let tree = sample_tree();

    assert_eq!(tree.get_as::<String>("name"), Some("John".to_string()));
    assert_eq!(tree.get_as::<f64>("address.geo.lat"), Some(40.7));
    assert_eq!(tree.get_as::<bool>("config.debug"), Some(true));
    assert_eq!(tree.get_as::<i64>("name"), None);
    assert_eq!(dotted::lookup_as::<&str>(&tree, "users.0.email"), Some("a@example.com"));
}

#[test]
fn test_type_mismatch_error() {
    let value = Value::from("text");
    let err = i64::try_from(&value).unwrap_err();

    assert!(err.is_type_error());
    assert!(matches!(
        err,
        Error::TypeMismatch { ref expected, ref actual } if expected == "int" && actual == "text"
    ));
}

#[test]
fn test_conversions_into_values() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), "x");
    assert_eq!(Value::from(vec![1, 2]), Value::Map(Map::list([1, 2])));
    assert!(Value::from(Object::new()).is_object());
    assert!(Value::from(Map::new()).is_empty_container());
    assert!(!Value::Int(0).is_empty_container());
}

#[test]
fn test_coercion_keeps_containers() {
    let mut object = Value::Object(Object::new().with("a", 1));
    object.coerce_container();
    assert!(object.is_object());

    object.coerce_map();
    assert_eq!(object, Value::Map(Map::new()));
}
