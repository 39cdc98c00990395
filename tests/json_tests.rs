/// JSON adapter tests
///
/// Exercises `Val<T>` through serde_json, both standalone and as a struct
/// field cooperating with `skip_serializing_if`.
/// Run with: cargo test --test json_tests
use omitval::{OmitError, Val};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct UserPatch {
    #[serde(default, skip_serializing_if = "Val::should_omit_field")]
    name: Val<String>,
    #[serde(default, skip_serializing_if = "Val::should_omit_field")]
    age: Val<u32>,
    #[serde(default, skip_serializing_if = "Val::should_omit_field")]
    tags: Val<Option<Vec<String>>>,
}

#[test]
fn test_encode_exact_bytes() {
    assert_eq!(serde_json::to_vec(&Val::<String>::new()).unwrap(), b"null");
    assert_eq!(
        serde_json::to_vec(&Val::from_value("hello")).unwrap(),
        br#""hello""#
    );
}

#[test]
fn test_set_values_roundtrip() {
    let original = Val::from_value(vec![1, 2, 3]);
    let encoded = original.encode_json().unwrap();

    let mut decoded = Val::<Vec<i32>>::new();
    decoded.decode_json(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_unset_does_not_roundtrip() {
    let encoded = Val::<i32>::new().encode_json().unwrap();
    assert_eq!(encoded, b"null");

    let mut decoded = Val::<i32>::new();
    let err = decoded.decode_json(&encoded).unwrap_err();
    assert!(matches!(err, OmitError::NullDecode));
    assert_eq!(err.to_string(), "cannot decode a null into an omit-only value");
    assert!(decoded.is_unset());
}

#[test]
fn test_missing_fields_are_unset() {
    let patch: UserPatch = serde_json::from_str(r#"{"name": "alice"}"#).unwrap();
    assert_eq!(patch.name.must_get(), "alice");
    assert!(patch.age.is_unset());
    assert!(patch.tags.is_unset());
}

#[test]
fn test_null_field_is_rejected() {
    let result = serde_json::from_str::<UserPatch>(r#"{"age": null}"#);
    assert!(result.is_err());
}

#[test]
fn test_type_errors_propagate() {
    let err = serde_json::from_str::<UserPatch>(r#"{"age": "old"}"#).unwrap_err();
    assert!(err.is_data());
}

#[test]
fn test_unset_fields_are_omitted() {
    let patch = UserPatch {
        age: Val::from_value(30),
        ..Default::default()
    };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"age":30}"#);
    assert_eq!(serde_json::to_string(&UserPatch::default()).unwrap(), "{}");
}

#[test]
fn test_set_to_nil_collection_is_omitted_but_set() {
    let patch = UserPatch {
        tags: Val::from_value(None),
        ..Default::default()
    };
    assert!(patch.tags.is_set());
    assert!(patch.tags.should_omit_field());

    let encoded = serde_json::to_string(&patch).unwrap();
    assert_eq!(encoded, "{}");

    let decoded: UserPatch = serde_json::from_str(&encoded).unwrap();
    assert!(decoded.tags.is_unset());
}

#[test]
fn test_nil_map_and_pointer_are_omit_eligible() {
    let nil_map: Val<Option<HashMap<String, i32>>> = Val::from_value(None);
    assert!(nil_map.is_set() && nil_map.should_omit_field());

    let nil_ptr: Val<Box<Option<Box<i32>>>> = Val::from_value(Box::new(None));
    assert!(nil_ptr.is_set() && nil_ptr.should_omit_field());

    let empty: Val<Vec<i32>> = Val::from_value(Vec::new());
    assert!(!empty.should_omit_field());
}

#[test]
fn test_struct_roundtrip() {
    let patch = UserPatch {
        name: Val::from_value("bob".into()),
        age: Val::new(),
        tags: Val::from_value(Some(vec!["a".into()])),
    };
    let encoded = serde_json::to_string(&patch).unwrap();
    assert_eq!(encoded, r#"{"name":"bob","tags":["a"]}"#);

    let decoded: UserPatch = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, patch);
}

#[test]
fn test_empty_input_unsets() {
    let mut val = Val::from_value(1);
    val.decode_json(b"").unwrap();
    assert!(val.is_unset());
}
