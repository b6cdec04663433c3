//! Edit form for one user record.
//!
//! The draft lives in `DirectoryState`, so a failed save leaves every typed
//! value in place. The optional replacement image is read straight from the
//! file input when Save is pressed.

#[cfg(test)]
#[path = "user_edit_modal_test.rs"]
mod user_edit_modal_test;

use leptos::html;
use leptos::prelude::*;

use crate::net::api::ImageFile;
use crate::net::types::{Role, Status};
use crate::state::directory::{DirectoryState, EditDraft};

/// Whether `role` is the draft's current role. Options carry their own
/// `selected` flag because a select's value is assigned before its options
/// exist.
pub(crate) fn role_selected(draft: Option<&EditDraft>, role: Role) -> bool {
    draft.is_some_and(|d| d.role == role)
}

pub(crate) fn status_selected(draft: Option<&EditDraft>, status: Status) -> bool {
    draft.is_some_and(|d| d.status == status)
}

#[component]
pub fn UserEditModal(
    directory: RwSignal<DirectoryState>,
    on_cancel: Callback<()>,
    on_save: Callback<Option<ImageFile>>,
) -> impl IntoView {
    let image_input = NodeRef::<html::Input>::new();

    let draft_field = move |pick: fn(&EditDraft) -> String| {
        move || directory.with(|d| d.draft().map(pick).unwrap_or_default())
    };
    let saving = move || directory.with(|d| d.saving);

    let submit = move || on_save.run(selected_image(image_input));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--user" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit User"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=draft_field(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                directory.update(|s| s.update_draft(|d| d.name = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=draft_field(|d| d.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                directory.update(|s| s.update_draft(|d| d.email = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=draft_field(|d| d.status.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(status) = Status::parse(&event_target_value(&ev)) {
                                    directory.update(|s| s.update_draft(|d| d.status = status));
                                }
                            }
                        >
                            {Status::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option
                                            value=s.as_str()
                                            prop:selected=move || directory.with(|d| status_selected(d.draft(), s))
                                        >
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Role"
                        <select
                            class="dialog__input"
                            prop:value=draft_field(|d| d.role.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    directory.update(|s| s.update_draft(|d| d.role = role));
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <option
                                            value=r.as_str()
                                            prop:selected=move || directory.with(|d| role_selected(d.draft(), r))
                                        >
                                            {r.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Profile Image"
                        <input class="dialog__input" type="file" accept="image/*" node_ref=image_input/>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=saving>
                            {move || if saving() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// First file picked in the image input, if any.
fn selected_image(input: NodeRef<html::Input>) -> Option<ImageFile> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}
