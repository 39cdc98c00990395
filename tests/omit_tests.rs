/// Container behaviour tests
///
/// Construction, state transitions, accessors and transforms.
/// Run with: cargo test --test omit_tests
use omitval::{State, Val};
use std::cell::Cell;
use std::panic;

#[test]
fn test_from_value_get_roundtrip() {
    for v in [0i64, -1, 42, i64::MAX] {
        assert_eq!(Val::from_value(v).get(), Some(&v));
    }
    assert_eq!(Val::from_value("hello").get(), Some(&"hello"));
}

#[test]
fn test_unset_get_and_zero() {
    let unset = Val::<i32>::new();
    assert_eq!(unset.get(), None);
    assert_eq!(unset.get_or_zero(), 0);

    let unset = Val::<String>::default();
    assert_eq!(unset.get_or_zero(), String::new());
    assert_eq!(unset.state(), State::Unset);
}

#[test]
fn test_from_ptr_copies_value() {
    let mut source = vec![1, 2, 3];
    let val = Val::from_ptr(Some(&source));
    source.push(4);

    assert_eq!(val.must_get(), &vec![1, 2, 3]);
    assert!(Val::<Vec<i32>>::from_ptr(None).is_unset());
}

#[test]
fn test_map_identity_and_laziness() {
    assert_eq!(Val::from_value(9).map(|v| v), Val::from_value(9));

    let calls = Cell::new(0);
    let mapped: Val<String> = Val::<i32>::new().map(|v| {
        calls.set(calls.get() + 1);
        v.to_string()
    });
    assert!(mapped.is_unset());
    assert_eq!(calls.get(), 0);

    let mapped = omitval::map(Val::from_value(2), |v| {
        calls.set(calls.get() + 1);
        v * 10
    });
    assert_eq!(mapped.must_get(), &20);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_must_get_on_unset_does_not_return() {
    let result = panic::catch_unwind(|| {
        let val = Val::<i32>::new();
        *val.must_get()
    });
    assert!(result.is_err());
}

#[test]
fn test_unset_then_reuse() {
    let mut val = Val::from_value(String::from("stale"));
    val.unset();
    assert_eq!(val.get_or(String::from("fresh")), "fresh");

    val.set(String::from("new"));
    assert_eq!(val.get_or_zero(), "new");
}

#[test]
fn test_state_both_ways() {
    let mut val: Val<u8> = 5u8.into();
    assert_eq!(val.state(), State::Set);
    assert_eq!(val.state().to_string(), "set");

    val.unset();
    assert_eq!(val.state(), State::Unset);
    assert_eq!(val.state().to_string(), "unset");
}

#[test]
fn test_copy_semantics() {
    let a = Val::from_value(1u32);
    let mut b = a;
    b.set(2);
    assert_eq!(a.get(), Some(&1));
    assert_eq!(b.get(), Some(&2));
}
