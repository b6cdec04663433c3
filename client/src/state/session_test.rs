use super::*;

fn store() -> SessionStore {
    SessionStore::new(MemoryStorage::default())
}

fn login_response() -> LoginResponse {
    LoginResponse { token: "abc".to_owned(), role: "admin".to_owned() }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn pending_state_is_unresolved_and_signed_out() {
    let state = SessionState::pending();
    assert!(!state.resolved);
    assert!(!state.authenticated);
    assert!(state.role.is_none());
}

#[test]
fn signed_in_keeps_role() {
    let state = SessionState::signed_in(Some("admin".to_owned()));
    assert!(state.resolved && state.authenticated);
    assert_eq!(state.role.as_deref(), Some("admin"));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn empty_store_is_signed_out() {
    assert_eq!(store().state(), SessionState::signed_out());
}

#[test]
fn store_login_persists_token_and_role() {
    let s = store();
    s.store_login(&login_response());
    assert_eq!(s.token().as_deref(), Some("abc"));
    assert_eq!(s.role().as_deref(), Some("admin"));
    assert_eq!(s.state(), SessionState::signed_in(Some("admin".to_owned())));
}

#[test]
fn clear_removes_token_and_role_together() {
    let s = store();
    s.store_login(&login_response());
    s.clear();
    assert!(s.token().is_none());
    assert!(s.role().is_none());
    assert_eq!(s.state(), SessionState::signed_out());
}

#[test]
fn blank_token_counts_as_signed_out() {
    let backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, "   ");
    let s = SessionStore::new(backend);
    assert!(!s.is_authenticated());
}

#[test]
fn clones_share_the_same_backend() {
    let a = store();
    let b = a.clone();
    a.store_login(&login_response());
    assert!(b.is_authenticated());
    b.clear();
    assert!(!a.is_authenticated());
}

// =============================================================
// apply_login
// =============================================================

#[test]
fn apply_login_success_stores_credentials() {
    let s = store();
    let state = apply_login(&s, Ok(login_response())).unwrap();
    assert!(state.authenticated);
    assert_eq!(state.role.as_deref(), Some("admin"));
    assert_eq!(s.token().as_deref(), Some("abc"));
}

#[test]
fn apply_login_failure_stores_nothing() {
    let s = store();
    let failure = ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) };
    let err = apply_login(&s, Err(failure.clone())).unwrap_err();
    assert_eq!(err, failure);
    assert!(s.token().is_none());
    assert!(s.role().is_none());
    assert!(!s.state().authenticated);
}

#[test]
fn apply_login_rejects_empty_token() {
    let s = store();
    let resp = LoginResponse { token: String::new(), role: "user".to_owned() };
    assert!(matches!(apply_login(&s, Ok(resp)), Err(ApiError::Decode(_))));
    assert!(!s.is_authenticated());
}
