use super::*;

#[test]
fn validate_login_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login("  a@b.com  ", " x "),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: " x ".to_owned() })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "x"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("   ", "x"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("a@b.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_login_builds_request_for_scenario_credentials() {
    let req = validate_login("a@b.com", "x").unwrap();
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@b.com", "password": "x" }));
}
