use crate::{Identity, UserId};

#[test]
fn test_credentialed_identity_has_generated_id_and_credentials() {
    let identity = Identity::credentialed(
        "a@x.com".to_string(),
        "$2b$10$hash".to_string(),
        Some("Ada".to_string()),
    );

    assert!(identity.id.as_str().starts_with("user_"));
    assert!(identity.has_credentials());
    assert_eq!(identity.name.as_deref(), Some("Ada"));
}

#[test]
fn test_anonymous_identity_keeps_client_id_without_credentials() {
    let id = UserId::parse("dev-123").unwrap();
    let identity = Identity::anonymous(id.clone());

    assert_eq!(identity.id, id);
    assert!(!identity.has_credentials());
    assert!(identity.email.is_none());
}
