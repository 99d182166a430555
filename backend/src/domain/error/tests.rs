//! Tests for domain error classification.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::not_found(DomainError::not_found("gone"), ErrorKind::NotFound)]
#[case::validation(DomainError::validation("bad"), ErrorKind::Validation)]
#[case::conflict(DomainError::conflict("taken"), ErrorKind::Conflict)]
#[case::unexpected(DomainError::unexpected("boom"), ErrorKind::Unexpected)]
fn constructors_set_kind(#[case] error: DomainError, #[case] expected: ErrorKind) {
    assert_eq!(error.kind(), expected);
    assert_eq!(DomainFailure::kind(&error), Some(expected));
}

#[rstest]
fn display_is_the_message_verbatim() {
    let error = DomainError::validation("email is required");
    assert_eq!(error.to_string(), "email is required");
    assert_eq!(error.message(), "email is required");
}

#[rstest]
fn empty_messages_are_accepted() {
    let error = DomainError::conflict("");
    assert_eq!(error.message(), "");
}

#[rstest]
#[case("not_found", ErrorKind::NotFound)]
#[case("validation", ErrorKind::Validation)]
#[case("conflict", ErrorKind::Conflict)]
#[case("unexpected", ErrorKind::Unexpected)]
fn codes_parse_to_kinds(#[case] code: &str, #[case] expected: ErrorKind) {
    assert_eq!(ErrorKind::from_code(code), Some(expected));
    assert_eq!(code.parse::<ErrorKind>(), Ok(expected));
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case("")]
#[case("NotFound")]
#[case("forbidden")]
fn unknown_codes_are_rejected(#[case] code: &str) {
    assert_eq!(ErrorKind::from_code(code), None);
    let err = code
        .parse::<ErrorKind>()
        .expect_err("unknown code must not parse");
    assert_eq!(err.code(), code);
    assert_eq!(err.to_string(), format!("unknown error kind `{code}`"));
}

#[rstest]
fn serde_uses_snake_case_codes() {
    let error = DomainError::not_found("user 42 not found");
    let value = serde_json::to_value(&error).expect("serialises");
    assert_eq!(
        value,
        json!({"kind": "not_found", "message": "user 42 not found"})
    );

    let back: DomainError = serde_json::from_value(value).expect("deserialises");
    assert_eq!(back, error);
}

#[rstest]
fn deserialising_an_unknown_kind_fails() {
    let payload = json!({"kind": "gone", "message": "x"});
    assert!(serde_json::from_value::<DomainError>(payload).is_err());
}
