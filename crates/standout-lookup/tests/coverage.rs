//! End-to-end scenarios across both the typed and the dynamic surface.

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::Serialize;
use standout_lookup::{
    contains, contains_key, every, every_key, filter, find, find_key, index_of, last_index_of,
    lookup, some, some_key, Func, Kind, Lookup, LookupError, Mode, Param, ToValue, Unsupported,
    Value,
};

// ============================================================================
// Typed surface
// ============================================================================

#[test]
fn typed_filter_even_numbers() {
    assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), [&2, &4]);
}

#[test]
fn typed_find_longer_than_one() {
    assert_eq!(find(&["a", "bb", "ccc"], |w| w.len() > 1), Some(&"bb"));
}

#[test]
fn typed_index_of_text_and_sequence() {
    assert_eq!(index_of("hello world", "world"), Some(6));
    assert_eq!(index_of(&[1, 2, 3], &5), None);
}

#[test]
fn typed_contains_mapping_value_and_key() {
    let map: HashMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
    assert!(contains(&map, &2));
    assert!(contains_key(&map, &"y"));
}

#[test]
fn typed_every_and_some() {
    assert!(every(&[1, 2, 3], &[1, 3]));
    assert!(some(&[1, 2, 3], &[9, 3]));
    assert!(!some(&[1, 2, 3], &[9, 8]));
}

#[test]
fn typed_containers_of_every_shape() {
    let deque: VecDeque<i32> = (0..5).collect();
    assert_eq!(last_index_of(&deque, &4), Some(4));

    let tree: BTreeMap<&str, Vec<i32>> = [("a", vec![1]), ("b", vec![2, 3])].into_iter().collect();
    assert_eq!(find_key(&tree, |v| v.len() == 2), Some((&"b", &vec![2, 3])));
    assert!(contains(&tree, &vec![1]));

    let owned = String::from("mississippi");
    assert_eq!(last_index_of(&owned, "ss"), Some(5));
    assert_eq!(filter(&owned, |c| c == 's').len(), 4);
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    title: String,
    tags: Vec<String>,
}

#[test]
fn typed_structural_membership() {
    let tasks = vec![
        Task {
            title: "write".into(),
            tags: vec!["docs".into()],
        },
        Task {
            title: "fix".into(),
            tags: vec!["bug".into(), "urgent".into()],
        },
    ];
    let needle = Task {
        title: "fix".into(),
        tags: vec!["bug".into(), "urgent".into()],
    };
    assert_eq!(index_of(&tasks, &needle), Some(1));

    let reordered = Task {
        title: "fix".into(),
        tags: vec!["urgent".into(), "bug".into()],
    };
    assert!(!contains(&tasks, &reordered));
}

// ============================================================================
// Dynamic surface
// ============================================================================

fn even() -> Value {
    Value::Func(Func::predicate(|v| {
        matches!(v.as_number(), Some(n) if [0i64, 2, 4, 6, 8].iter().any(|e| n == (*e).into()))
    }))
}

#[test]
fn dynamic_scenarios() {
    let numbers = Value::seq([1, 2, 3, 4]);
    assert_eq!(lookup::filter(&numbers, &even()).unwrap(), Value::seq([2, 4]));

    let words = Value::seq(["a", "bb", "ccc"]);
    let longer = Value::Func(Func::predicate(|v| v.as_str().is_some_and(|s| s.len() > 1)));
    assert_eq!(lookup::find(&words, &longer).unwrap(), Some(Value::from("bb")));

    assert_eq!(
        lookup::index_of(&Value::from("hello world"), &Value::from("world")).unwrap(),
        Some(6)
    );
    assert_eq!(
        lookup::index_of(&Value::seq([1, 2, 3]), &Value::from(5)).unwrap(),
        None
    );

    let map = Value::map([("x", 1), ("y", 2)]);
    assert!(lookup::contains(&map, &Value::from(2)).unwrap());
    assert!(lookup::contains_key(&map, &Value::from("y")).unwrap());

    let small = Value::seq([1, 2, 3]);
    assert!(lookup::every(&small, &[Value::from(1), Value::from(3)]).unwrap());
    assert!(lookup::some(&small, &[Value::from(9), Value::from(3)]).unwrap());
    assert!(!lookup::some(&small, &[Value::from(9), Value::from(8)]).unwrap());
}

#[test]
fn dynamic_filter_aborts_on_non_boolean_predicate() {
    let doubled = Value::Func(Func::new([Param::Any], [Param::Of(Kind::Int)], |args| {
        panic!("must not be called, got {args:?}")
    }));
    let err = lookup::filter(&Value::seq([1, 2, 3, 4]), &doubled).unwrap_err();
    assert_eq!(err.to_string(), "return argument should be a boolean, got int");
}

#[test]
fn dynamic_filter_rejects_non_functions_and_wrong_arity() {
    let items = Value::seq([1]);
    assert!(matches!(
        lookup::filter(&items, &Value::from("f")).unwrap_err(),
        LookupError::NotAFunction { kind: Kind::String }
    ));

    let nullary = Value::Func(Func::new(Vec::new(), [Param::Of(Kind::Bool)], |_| {
        vec![Value::from(true)]
    }));
    assert!(matches!(
        lookup::find(&items, &nullary).unwrap_err(),
        LookupError::ArityMismatch { actual_in: 0, .. }
    ));
}

#[test]
fn dynamic_filter_rejects_lying_predicate() {
    let liar = Value::Func(Func::new([Param::Any], [Param::Of(Kind::Bool)], |_| {
        vec![Value::from("yes")]
    }));
    let err = lookup::filter(&Value::seq([1]), &liar).unwrap_err();
    assert!(matches!(err, LookupError::ReturnMismatch { .. }));
}

#[test]
fn dynamic_contains_with_modes() {
    let map = Value::map([("x", "y"), ("z", "w")]);
    let lookup = Lookup::new();
    assert!(lookup.contains_with(&map, &Value::from("y"), Mode::Value).unwrap());
    assert!(!lookup.contains_with(&map, &Value::from("y"), Mode::Key).unwrap());
    assert!(lookup.contains_with(&map, &Value::from("z"), Mode::Key).unwrap());
}

#[test]
fn every_and_some_by_mapping_key() {
    let typed: HashMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
    assert!(every_key(&typed, &["x", "y"]));
    assert!(some_key(&typed, &["q", "y"]));
    assert!(!every(&typed, &[1, 3]));

    let map = Value::map([("x", 1), ("y", 2)]);
    let keys = [Value::from("x"), Value::from("y")];
    let engine = Lookup::new();
    assert!(engine.every_with(&map, &keys, Mode::Key).unwrap());
    assert!(engine.some_with(&map, &keys, Mode::Key).unwrap());
    assert!(!engine.every_with(&map, &keys, Mode::Value).unwrap());
    assert!(!lookup::some(&map, &keys).unwrap());
}

#[test]
fn dynamic_regex_needle() {
    let emails = Value::seq(["ana", "bo@example.com", "cy"]);
    let email = Value::Func(Func::matches(r"^[^@]+@[^@]+$").unwrap());
    assert_eq!(lookup::index_of(&emails, &email).unwrap(), Some(1));
    assert!(lookup::contains(&emails, &email).unwrap());
    assert_eq!(
        lookup::filter(&emails, &email).unwrap(),
        Value::seq(["bo@example.com"])
    );
}

#[test]
fn dynamic_invalid_regex() {
    assert!(matches!(
        Func::matches("[unclosed"),
        Err(LookupError::InvalidPattern(_))
    ));
}

#[test]
fn dynamic_unsupported_policy_is_uniform() {
    let strict = Lookup::new();
    let lenient = Lookup::new().on_unsupported(Unsupported::NotFound).build();
    let map = Value::map([("a", 1)]);
    let needle = Value::from(1);

    for result in [
        strict.index_of(&map, &needle).map(|_| ()),
        strict.last_index_of(&map, &needle).map(|_| ()),
        strict.contains(&Value::from(1.5), &needle).map(|_| ()),
    ] {
        assert!(matches!(result, Err(LookupError::UnsupportedKind { .. })));
    }

    assert_eq!(lenient.index_of(&map, &needle).unwrap(), None);
    assert_eq!(lenient.last_index_of(&map, &needle).unwrap(), None);
    assert!(!lenient.contains(&Value::from(1.5), &needle).unwrap());
}

#[derive(Serialize)]
struct Row {
    id: u32,
    labels: Vec<&'static str>,
}

#[test]
fn dynamic_values_from_serde() {
    let rows = Value::from_serialize(&vec![
        Row {
            id: 1,
            labels: vec!["a"],
        },
        Row {
            id: 2,
            labels: vec!["b", "c"],
        },
    ])
    .unwrap();

    let needle = Value::map([
        ("id", Value::from(2)),
        ("labels", Value::seq(["b", "c"])),
    ]);
    assert_eq!(lookup::index_of(&rows, &needle).unwrap(), Some(1));
}

struct Point {
    x: i64,
    y: i64,
}

impl ToValue for Point {
    fn to_value(&self) -> Value {
        Value::structure("Point", [("x", self.x), ("y", self.y)])
    }
}

#[test]
fn dynamic_struct_membership() {
    let points = Value::seq([
        Point { x: 0, y: 0 }.to_value(),
        Point { x: 1, y: 2 }.to_value(),
    ]);
    assert!(lookup::contains(&points, &Point { x: 1, y: 2 }.to_value()).unwrap());
    assert!(!lookup::contains(&points, &Point { x: 2, y: 1 }.to_value()).unwrap());
    assert!(!lookup::contains(
        &points,
        &Value::structure("Other", [("x", 1), ("y", 2)])
    )
    .unwrap());
}

#[test]
fn dynamic_find_key_on_text() {
    let upper = Value::Func(Func::predicate(|v| {
        v.as_str().is_some_and(|s| s.chars().all(char::is_uppercase))
    }));
    assert_eq!(
        lookup::find_key(&Value::from("éaB"), &upper).unwrap(),
        Some((Value::from(3usize), Value::from("B")))
    );
}

#[test]
fn dynamic_results_are_idempotent() {
    let items = Value::seq([3, 1, 4, 1, 5]);
    let first = lookup::filter(&items, &even()).unwrap();
    let second = lookup::filter(&items, &even()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        lookup::last_index_of(&items, &Value::from(1)).unwrap(),
        lookup::last_index_of(&items, &Value::from(1)).unwrap()
    );
}
