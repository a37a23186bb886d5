use dotted::{Key, Map, Value};

use crate::helpers::*;

fn orders() -> Map {
    match tree(
        r#"[
            {"id": 10, "customer": {"name": "Ann"}, "total": 30.5, "status": "paid"},
            {"id": 11, "customer": {"name": "Bob"}, "total": 12, "status": "open"},
            {"id": 12, "customer": {"name": "Ann"}, "total": 7, "status": "paid"}
        ]"#,
    ) {
        Value::Map(map) => map,
        other => panic!("Expected a list, got: {other:?}"),
    }
}

#[test]
fn test_pluck_nested_paths() {
    let names = dotted::pluck(&orders(), "customer.name", None);
    assert_eq!(Value::Map(names), list(["Ann", "Bob", "Ann"]));

    let totals = dotted::pluck(&orders(), "total", Some("id"));
    assert_eq!(totals.get("11"), Some(&Value::Int(12)));
    assert_eq!(totals.keys().next(), Some(&Key::Int(10)));
}

#[test]
fn test_group_and_key_by() {
    let by_customer = dotted::group_by(&orders(), "customer.name");
    assert_eq!(key_names(&Value::Map(by_customer.clone())), vec!["Ann", "Bob"]);
    assert_eq!(
        dotted::pluck(
            by_customer.get("Ann").and_then(Value::as_map).unwrap(),
            "id",
            None
        ),
        Map::list([10, 12])
    );

    let by_id = dotted::key_by(&orders(), "id");
    assert_eq!(dotted::get(&Value::Map(by_id), "12.status", Value::Null), "paid");
}

#[test]
fn test_sort_by_mixed_numbers() {
    let sorted = dotted::sort_by(&orders(), "total");
    let ids: Vec<Value> = sorted.values().map(|order| dotted::get(order, "id", Value::Null)).collect();
    assert_eq!(ids, vec![Value::Int(12), Value::Int(11), Value::Int(10)]);
}

#[test]
fn test_filter_first_last() {
    let orders = orders();
    let paid = |order: &Value, _: &Key| dotted::get(order, "status", Value::Null) == "paid";

    assert_eq!(dotted::filter(&orders, paid).len(), 2);
    assert_eq!(dotted::first(&orders, paid).map(|o| dotted::get(o, "id", Value::Null)), Some(Value::Int(10)));
    assert_eq!(dotted::last(&orders, paid).map(|o| dotted::get(o, "id", Value::Null)), Some(Value::Int(12)));
}

#[test]
fn test_only_except_wrap_flatten() {
    let tree = sample_tree();
    let root = tree.as_map().unwrap();

    assert_eq!(key_names(&Value::Map(dotted::only(root, ["name", "users"]))), vec!["name", "users"]);
    assert_eq!(dotted::except(root, ["users", "address"]).len(), 3);
    assert_eq!(dotted::wrap(Value::from("x")), Map::list(["x"]));

    let roles = dotted::pluck(
        dotted::get(&tree, "users", Value::Null).as_map().unwrap(),
        "roles",
        None,
    );
    assert_eq!(dotted::flatten(&roles, usize::MAX), Map::list(["admin", "dev", "dev"]));
}
