use super::*;
use crate::net::types::User;

fn admin_inactive() -> User {
    User {
        id: "42".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Admin,
        status: Status::Inactive,
        last_login: None,
        profile_image: None,
    }
}

#[test]
fn options_mark_the_drafts_role_and_status() {
    let draft = EditDraft::from_user(&admin_inactive());

    let roles: Vec<Role> = Role::ALL.into_iter().filter(|r| role_selected(Some(&draft), *r)).collect();
    let statuses: Vec<Status> = Status::ALL.into_iter().filter(|s| status_selected(Some(&draft), *s)).collect();

    assert_eq!(roles, vec![Role::Admin]);
    assert_eq!(statuses, vec![Status::Inactive]);
}

#[test]
fn first_option_is_not_selected_for_an_admin() {
    let draft = EditDraft::from_user(&admin_inactive());
    assert!(!role_selected(Some(&draft), Role::ALL[0]));
    assert!(!status_selected(Some(&draft), Status::ALL[0]));
}

#[test]
fn selection_follows_draft_edits() {
    let mut state = DirectoryState::default();
    state.open_edit(&admin_inactive());
    state.update_draft(|d| d.role = Role::User);

    assert!(role_selected(state.draft(), Role::User));
    assert!(!role_selected(state.draft(), Role::Admin));
    assert_eq!(state.begin_save().map(|d| d.role), Some(Role::User));
}

#[test]
fn nothing_is_selected_without_a_draft() {
    assert!(Role::ALL.into_iter().all(|r| !role_selected(None, r)));
    assert!(Status::ALL.into_iter().all(|s| !status_selected(None, s)));
}
