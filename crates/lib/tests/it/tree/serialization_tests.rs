use dotted::{Map, Object, Value};

use crate::helpers::*;

#[test]
fn test_json_round_trip_keeps_order() {
    let json = r#"{"z":1,"a":{"y":[1,2.5,"x",null,true],"b":[]}}"#;
    let value = tree(json);
    assert_eq!(value.to_json_string().unwrap(), json);
    assert_eq!(key_names(&value), vec!["z", "a"]);
}

#[test]
fn test_empty_containers_serialize_as_lists() {
    let value = tree(r#"{"a":{},"b":[]}"#);
    assert_eq!(value.to_json_string().unwrap(), r#"{"a":[],"b":[]}"#);
}

#[test]
fn test_serde_struct_fields() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Snapshot {
        data: Value,
        meta: Map,
    }

    let snapshot = Snapshot {
        data: Value::Object(Object::new().with("id", 3)),
        meta: Map::new().with("version", "1"),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(json, r#"{"data":{"id":3},"meta":{"version":"1"}}"#);

    let back: Snapshot = serde_json::from_str(&json).unwrap();
    // Objects are read back as maps
    assert_eq!(back.data, Value::Map(Map::new().with("id", 3)));
    assert_eq!(back.meta, snapshot.meta);
}

#[test]
fn test_deserializing_map_from_scalar_fails() {
    assert!(serde_json::from_str::<Map>("42").is_err());
    assert!(Value::from_json_str("{").unwrap_err().is_serialization_error());
}
