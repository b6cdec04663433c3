use super::*;
use crate::net::api::ApiError;
use crate::net::types::{Role, Status};
use crate::state::toast::ToastKind;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Admin,
        status: Status::Active,
        last_login: None,
        profile_image: None,
    }
}

#[test]
fn signed_in_caption_names_the_role() {
    assert_eq!(signed_in_caption(Some("admin")), "Signed in as admin");
    assert_eq!(signed_in_caption(Some("  ")), "Signed in");
    assert_eq!(signed_in_caption(None), "Signed in");
}

#[test]
fn table_placeholder_while_first_fetch_runs() {
    let mut state = DirectoryState::default();
    state.begin_fetch();
    assert_eq!(table_placeholder(&state), Some("Loading users..."));
}

#[test]
fn table_placeholder_after_empty_fetch() {
    let mut state = DirectoryState::default();
    state.begin_fetch();
    state.apply_fetch(Vec::new());
    assert_eq!(table_placeholder(&state), Some("No users found"));
}

#[test]
fn table_placeholder_hidden_when_rows_exist() {
    let mut state = DirectoryState::default();
    state.apply_fetch(vec![user("1")]);
    state.begin_fetch();
    assert_eq!(table_placeholder(&state), None);
}

#[test]
fn failed_refetch_keeps_rows_and_records_message() {
    let mut state = DirectoryState::default();
    state.apply_fetch(vec![user("1"), user("42")]);
    state.begin_fetch();
    state.fail_fetch(FETCH_FAILED);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch users"));
    assert_eq!(table_placeholder(&state), None);
}

fn toast_messages(outcome: &Result<(), SyncError>) -> Vec<(ToastKind, String)> {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        report_sync(toasts, outcome, DELETE_SUCCESS, DELETE_FAILED);
        toasts.get_untracked().items.into_iter().map(|t| (t.kind, t.message)).collect()
    })
}

#[test]
fn report_sync_success_is_one_success_toast() {
    assert_eq!(toast_messages(&Ok(())), vec![(ToastKind::Success, "User deleted".to_owned())]);
}

#[test]
fn report_sync_rejected_mutation_shows_server_message() {
    let err = ApiError::Rejected { status: 404, message: Some("User not found".to_owned()) };
    assert_eq!(
        toast_messages(&Err(SyncError::Mutation(err))),
        vec![(ToastKind::Error, "User not found".to_owned())]
    );
    let silent = ApiError::Network("offline".to_owned());
    assert_eq!(
        toast_messages(&Err(SyncError::Mutation(silent))),
        vec![(ToastKind::Error, "Delete failed".to_owned())]
    );
}

#[test]
fn report_sync_failed_refetch_still_confirms_mutation() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(
        toast_messages(&Err(SyncError::Refresh(err))),
        vec![
            (ToastKind::Success, "User deleted".to_owned()),
            (ToastKind::Error, "Failed to fetch users".to_owned()),
        ]
    );
}

#[test]
fn report_sync_leaves_invalidation_to_the_global_handler() {
    let err = ApiError::AuthInvalid { message: "Invalid token".to_owned() };
    assert!(toast_messages(&Err(SyncError::Mutation(err))).is_empty());
}
