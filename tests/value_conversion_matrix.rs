use std::borrow::Cow;
use std::collections::BTreeMap;

use json_cow::{Json, JsonValue};

fn obj<'a>(fields: &[(&'a str, Json<'a>)]) -> JsonValue<'a> {
    fields.iter().cloned().collect()
}

#[test]
fn primitive_conversion_matrix() {
    let cases: Vec<(Json, JsonValue)> = vec![
        (Json::from(JsonValue::Null), JsonValue::Null),
        (Json::from(42i64), JsonValue::Int(42)),
        (Json::from(-1i64), JsonValue::Int(-1)),
        (Json::from(true), JsonValue::Bool(true)),
        (Json::from(2.5f64), JsonValue::Float(2.5)),
        (Json::from("text"), JsonValue::String("text".into())),
        (
            Json::from(String::from("owned")),
            JsonValue::String("owned".into()),
        ),
    ];
    for (json, expected) in cases {
        assert_eq!(json, Json(Some(expected)));
    }
}

#[test]
fn absent_is_not_null() {
    let absent = Json::from(None);
    assert!(!absent.has_value());
    assert!(Json::from(JsonValue::Null).has_value());
    assert_ne!(absent, Json::from(JsonValue::Null));
}

#[test]
fn spec_example_object() {
    let value: JsonValue = [("x", Json::from(1i64)), ("y", Json::from(true))]
        .into_iter()
        .collect();
    let JsonValue::Object(entries) = value else {
        panic!("expected Object");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries["x"], Json::from(1i64));
    assert_eq!(entries["y"], Json::from(true));
}

#[test]
fn collection_conversion_matrix() {
    // Empty sequence is an empty Array, not an error.
    let empty: JsonValue = Vec::<Json>::new().into();
    assert_eq!(empty, JsonValue::Array(vec![]));

    let from_vec: JsonValue = vec!["a", "b"].into();
    assert_eq!(
        from_vec,
        JsonValue::Array(vec![Json::from("a"), Json::from("b")])
    );

    let from_map: JsonValue = BTreeMap::from([("k", 1i64)]).into();
    assert_eq!(from_map, obj(&[("k", Json::from(1i64))]));

    let slice = [Json::from(false)];
    assert_eq!(
        JsonValue::from(&slice[..]),
        JsonValue::Array(vec![Json::from(false)])
    );
}

#[test]
fn object_keys_stay_unique_and_sorted() {
    let value: JsonValue = [
        ("b", Json::from(2i64)),
        ("a", Json::from(1i64)),
        ("b", Json::from(3i64)),
    ]
    .into_iter()
    .collect();
    let JsonValue::Object(entries) = value else {
        panic!("expected Object");
    };
    let keys: Vec<&str> = entries.keys().map(Cow::as_ref).collect();
    assert_eq!(keys, ["a", "b"]);
    // Last write wins for a duplicate key.
    assert_eq!(entries["b"], Json::from(3i64));
}

#[test]
fn borrowed_text_stays_borrowed() {
    let buf = String::from("shared buffer");
    let value = JsonValue::from(buf.as_str());
    match &value {
        JsonValue::String(Cow::Borrowed(s)) => {
            assert!(std::ptr::eq(*s, buf.as_str()));
        }
        other => panic!("expected borrowed string, got {other:?}"),
    }
}
