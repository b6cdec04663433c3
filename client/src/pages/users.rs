//! User directory page: list, view, edit, delete, export, logout.
//!
//! The loaded list is a cache of the last `GET /users`. Every successful
//! edit or delete re-fetches the whole collection instead of patching rows.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::user_edit_modal::UserEditModal;
use crate::components::user_row::UserRow;
use crate::components::user_view_modal::UserViewModal;
use crate::net::api::{ApiClient, ImageFile};
use crate::net::types::User;
use crate::state::directory::DirectoryState;
#[cfg(feature = "hydrate")]
use crate::state::directory_sync;
use crate::state::directory_sync::{FETCH_FAILED, SyncError};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::util::auth::{LOGIN_PATH, end_session};
use crate::util::auth::USERS_PATH;
use crate::util::notify;

pub(crate) const DELETE_PROMPT: &str = "Delete this user?";
pub(crate) const DELETE_SUCCESS: &str = "User deleted";
pub(crate) const DELETE_FAILED: &str = "Delete failed";
pub(crate) const UPDATE_SUCCESS: &str = "User updated successfully";
pub(crate) const UPDATE_FAILED: &str = "Update failed";
pub(crate) const EXPORT_SUCCESS: &str = "Excel file downloaded";
pub(crate) const EXPORT_FAILED: &str = "Export failed";
pub(crate) const LOGOUT_SUCCESS: &str = "Logged out";

/// Header caption for the signed-in account.
pub(crate) fn signed_in_caption(role: Option<&str>) -> String {
    match role.map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => format!("Signed in as {role}"),
        None => "Signed in".to_owned(),
    }
}

/// Placeholder row text when the table has nothing to show.
pub(crate) fn table_placeholder(state: &DirectoryState) -> Option<&'static str> {
    if !state.items.is_empty() {
        return None;
    }
    Some(if state.loading { "Loading users..." } else { "No users found" })
}

/// Initial load and manual refreshes: report a failed fetch as a toast.
#[cfg(feature = "hydrate")]
async fn refresh_users(api: &ApiClient, directory: RwSignal<DirectoryState>, toasts: RwSignal<ToastState>) {
    if let Err(err) = directory_sync::refresh(api, directory).await {
        log::warn!("user fetch failed: {err}");
        notify::report_failure(toasts, &err, FETCH_FAILED);
    }
}

/// Toast for a finished mutation. A failed follow-up fetch still means the
/// mutation itself went through.
pub(crate) fn report_sync(toasts: RwSignal<ToastState>, outcome: &Result<(), SyncError>, success: &str, failure: &str) {
    match outcome {
        Ok(()) => notify::success(toasts, success),
        Err(SyncError::Refresh(err)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("user fetch failed: {err}");
            notify::success(toasts, success);
            notify::report_failure(toasts, err, FETCH_FAILED);
        }
        Err(SyncError::Mutation(err)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("{failure}: {err}");
            notify::report_failure(toasts, err, failure);
        }
    }
}

#[cfg(feature = "hydrate")]
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let navigate = use_navigate();

    let directory = RwSignal::new(DirectoryState::default());
    let users = Memo::new(move |_| directory.with(|d| d.items.clone()));
    let viewing = Memo::new(move |_| directory.with(|d| d.viewing().cloned()));
    let editing = Memo::new(move |_| directory.with(|d| d.draft().is_some()));

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            refresh_users(&api, directory, toasts).await;
        });
    });

    let on_view = Callback::new(move |user: User| directory.update(|d| d.open_view(user)));
    let on_edit = Callback::new(move |user: User| directory.update(|d| d.open_edit(&user)));
    let close_modal = Callback::new(move |()| directory.update(DirectoryState::close_modal));

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm_delete() {
                return;
            }
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let outcome = directory_sync::delete_then_refresh(&api, directory, &id).await;
                report_sync(toasts, &outcome, DELETE_SUCCESS, DELETE_FAILED);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_save = Callback::new(move |image: Option<ImageFile>| {
        let Some(draft) = directory.try_update(DirectoryState::begin_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let outcome = directory_sync::save_then_refresh(&api, directory, &draft, image).await;
                report_sync(toasts, &outcome, UPDATE_SUCCESS, UPDATE_FAILED);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, image);
    });

    let on_export = move |_| match directory.with_untracked(|d| crate::util::export::export_users(&d.items)) {
        Ok(_count) => {
            #[cfg(feature = "hydrate")]
            log::info!("exported {_count} users");
            notify::success(toasts, EXPORT_SUCCESS);
        }
        Err(_err) => {
            #[cfg(feature = "hydrate")]
            log::error!("export failed: {_err}");
            notify::error(toasts, EXPORT_FAILED);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = api.logout().await {
                    log::warn!("logout notification failed: {err}");
                }
                end_session(api.session(), session);
                notify::success(toasts, LOGOUT_SUCCESS);
                navigate(LOGIN_PATH, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    let caption = move || session.with(|s| signed_in_caption(s.role.as_deref()));

    view! {
        <div class="users-page">
            <header class="users-header">
                <div>
                    <h1 class="users-header__title">"User List"</h1>
                    <nav class="breadcrumb">
                        <a href=USERS_PATH>"Home"</a>
                        <span class="breadcrumb__sep">"/"</span>
                        <span>"Users"</span>
                    </nav>
                </div>
                <div class="users-header__actions">
                    <span class="users-header__role">{caption}</span>
                    <button class="btn btn--success" on:click=on_export>
                        "Export to Excel"
                    </button>
                    <button class="btn btn--secondary" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <Show when=move || directory.with(|d| d.error.is_some())>
                <p class="users-error">{move || directory.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>

            <table class="users-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Role"</th>
                        <th>"Last Online"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        directory
                            .with(table_placeholder)
                            .map(|text| view! {
                                <tr>
                                    <td class="users-table__empty" colspan="5">{text}</td>
                                </tr>
                            })
                    }}
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| view! {
                                <UserRow user=user on_view=on_view on_edit=on_edit on_delete=on_delete/>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || viewing.get().map(|user| view! { <UserViewModal user=user on_close=close_modal/> })}
            <Show when=move || editing.get()>
                <UserEditModal directory=directory on_cancel=close_modal on_save=on_save/>
            </Show>
        </div>
    }
}
