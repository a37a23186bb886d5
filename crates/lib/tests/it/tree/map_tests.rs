use dotted::{Key, Map, Object, Value, tree::Container};

#[test]
fn test_integer_strings_are_integer_keys() {
    let mut map = Map::new();
    map.insert("0", "zero");
    map.insert(1, "one");
    map.insert("01", "padded");
    map.insert("-7", "negative");

    assert_eq!(map.get("0"), map.get_key(&Key::Int(0)));
    assert_eq!(map.get("1"), Some(&Value::from("one")));
    assert_eq!(map.get_key(&Key::Str("01".to_string())), Some(&Value::from("padded")));
    assert_eq!(map.get_key(&Key::Int(-7)), Some(&Value::from("negative")));
}

#[test]
fn test_order_is_insertion_order() {
    let mut map = Map::new().with("b", 1).with("a", 2).with("c", 3);
    map.insert("b", 10);
    map.remove("a");
    map.insert("a", 20);

    let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["b", "c", "a"]);
}

#[test]
fn test_push_continues_after_largest_int_key() {
    let mut map = Map::new().with(5, "five").with("name", "n");
    assert_eq!(map.push("six"), Some(Key::Int(6)));
    assert!(!map.is_list());
    assert!(Map::list(["a", "b"]).is_list());
}

#[test]
fn test_container_view_of_object() {
    let mut value = Value::Object(Object::new().with("a", 1));
    let container = value.as_container_mut().expect("objects are containers");

    container.set_child("b", Value::from(2));
    assert_eq!(container.child_count(), 2);
    if let Some(child) = container.child_mut("a") {
        *child = Value::from(10);
    }
    assert_eq!(container.child("a"), Some(&Value::Int(10)));
    assert_eq!(container.kind(), "object");
}

#[test]
fn test_push_refuses_key_past_max() {
    let mut map = Map::new().with(i64::MAX, "a");

    assert_eq!(map.push("b"), None);
    assert_eq!(map.len(), 1);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![&Key::Int(i64::MAX)]);
}

#[test]
fn test_parse_long_list() {
    let json = format!("[{}]", vec!["1"; 40_000].join(","));
    let value = Value::from_json_str(&json).expect("Failed to parse list");
    let list = value.as_map().expect("lists parse as maps");

    assert_eq!(list.len(), 40_000);
    assert!(list.is_list());
    assert_eq!(list.get("39999"), Some(&Value::Int(1)));
}
