#![cfg(feature = "serde")]

//! Integration tests for serde support in fnkit.
//!
//! `Outcome` serializes as an externally tagged enum: `{"Ok": ..}` or
//! `{"Err": ..}`.

use fnkit::outcome::Outcome;
use rstest::rstest;

#[rstest]
fn test_outcome_json_roundtrip() {
    let ok: Outcome<i32, String> = Outcome::Ok(42);
    let err: Outcome<i32, String> = Outcome::Err("error".to_string());

    let ok_json = serde_json::to_string(&ok).unwrap();
    let err_json = serde_json::to_string(&err).unwrap();

    let restored_ok: Outcome<i32, String> = serde_json::from_str(&ok_json).unwrap();
    let restored_err: Outcome<i32, String> = serde_json::from_str(&err_json).unwrap();

    assert_eq!(ok, restored_ok);
    assert_eq!(err, restored_err);
}

#[rstest]
#[case(Outcome::Ok(1), r#"{"Ok":1}"#)]
#[case(Outcome::Err("bad".to_string()), r#"{"Err":"bad"}"#)]
fn test_outcome_json_shape(#[case] outcome: Outcome<i32, String>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&outcome).unwrap(), expected);
}

#[rstest]
fn test_outcome_rejects_unknown_variant() {
    let parsed: Result<Outcome<i32, String>, _> = serde_json::from_str(r#"{"Maybe":1}"#);
    assert!(parsed.is_err());
}
