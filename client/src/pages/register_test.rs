use super::*;

#[test]
fn validate_registration_accepts_matching_passwords() {
    assert_eq!(
        validate_registration(" new@b.com ", "secret", "secret"),
        Ok(RegisterRequest {
            email: "new@b.com".to_owned(),
            password: "secret".to_owned(),
            confirm_password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_registration_rejects_mismatch() {
    assert_eq!(validate_registration("a@b.com", "secret", "Secret"), Err(PASSWORD_MISMATCH));
    assert_eq!(validate_registration("a@b.com", "secret", "secret "), Err(PASSWORD_MISMATCH));
}

#[test]
fn validate_registration_requires_every_field() {
    assert_eq!(validate_registration("", "a", "a"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration("a@b.com", "", "a"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration("a@b.com", "a", ""), Err(MISSING_FIELDS));
}

#[test]
fn mismatch_message_matches_toast_text() {
    assert_eq!(PASSWORD_MISMATCH, "Passwords do not match");
}
