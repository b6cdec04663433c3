//! One directory table row with view/edit/delete actions.

#[cfg(test)]
#[path = "user_row_test.rs"]
mod user_row_test;

use leptos::prelude::*;

use super::user_avatar::UserAvatar;
use crate::net::types::{Role, Status, User};
use crate::util::datetime::{Layout, TABLE_MISSING, format_local};

pub fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge--primary",
        Role::User => "badge badge--info",
    }
}

pub fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Active => "badge badge--primary",
        Status::Inactive => "badge badge--secondary",
    }
}

#[component]
pub fn UserRow(
    user: User,
    on_view: Callback<User>,
    on_edit: Callback<User>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let last_online = format_local(user.last_login.as_deref(), Layout::Date, TABLE_MISSING);
    let view_user = user.clone();
    let edit_user = user.clone();
    let delete_id = user.id.clone();

    view! {
        <tr>
            <td class="user-cell">
                <UserAvatar name=user.name.clone() image=user.profile_image.clone()/>
                <div class="user-cell__text">
                    <strong>{user.name.clone()}</strong>
                    <small class="text-muted">{user.email.clone()}</small>
                </div>
            </td>
            <td>
                <span class=role_badge_class(user.role)>{user.role.as_str()}</span>
            </td>
            <td>{last_online}</td>
            <td>
                <span class=status_badge_class(user.status)>{user.status.as_str()}</span>
            </td>
            <td class="actions">
                <button
                    class="btn btn--sm btn--info"
                    title="View"
                    on:click=move |_| on_view.run(view_user.clone())
                >
                    "View"
                </button>
                <button
                    class="btn btn--sm btn--primary"
                    title="Edit"
                    on:click=move |_| on_edit.run(edit_user.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--sm btn--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
