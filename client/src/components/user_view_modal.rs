//! Read-only modal showing one user record.

use leptos::prelude::*;

use super::user_avatar::UserAvatar;
use crate::net::types::User;
use crate::util::datetime::{DETAIL_MISSING, Layout, format_local};

#[component]
pub fn UserViewModal(user: User, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let last_login = format_local(user.last_login.as_deref(), Layout::DateTime, DETAIL_MISSING);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--user"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"View User"</h2>
                <div class="dialog__avatar">
                    <UserAvatar name=user.name.clone() image=user.profile_image.clone() size=100/>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Name"</span>
                    <span class="dialog__profile-value">{user.name.clone()}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Email"</span>
                    <span class="dialog__profile-value">{user.email.clone()}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Status"</span>
                    <span class="dialog__profile-value">{user.status.as_str()}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Role"</span>
                    <span class="dialog__profile-value">{user.role.as_str()}</span>
                </div>
                <div class="dialog__profile-row">
                    <span class="dialog__profile-label">"Last Login"</span>
                    <span class="dialog__profile-value">{last_login}</span>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
