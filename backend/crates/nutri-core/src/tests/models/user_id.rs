use crate::{CoreError, UserId};

use googletest::prelude::*;

#[test]
fn given_padded_id_when_parsed_then_whitespace_is_trimmed() {
    let id = UserId::parse("  dev-123\n").unwrap();

    assert_that!(id.as_str(), eq("dev-123"));
}

#[test]
fn given_blank_id_when_parsed_then_validation_error_names_field() {
    for raw in ["", "   ", "\t\n"] {
        match UserId::parse(raw) {
            Err(CoreError::Validation { field, message, .. }) => {
                assert_eq!(field.as_deref(), Some("userId"));
                assert!(message.contains("required"));
            }
            other => panic!("Expected validation error for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_overlong_id_when_parsed_then_rejected() {
    let raw = "x".repeat(UserId::MAX_LEN + 1);

    assert!(UserId::parse(&raw).is_err());
    assert!(UserId::parse(&raw[..UserId::MAX_LEN]).is_ok());
}

#[test]
fn when_generated_then_prefixed_and_unique() {
    let ids: std::collections::HashSet<_> = (0..1000).map(|_| UserId::generate()).collect();

    assert_that!(ids.len(), eq(1000));
    assert!(ids.iter().all(|id| id.as_str().starts_with("user_")));
}
