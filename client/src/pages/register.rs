//! Registration page: email + password + confirmation.
//!
//! Password confirmation is checked locally; a mismatch never reaches the
//! network. A successful registration returns the user to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::toast::ToastState;
use crate::util::auth::LOGIN_PATH;
use crate::util::notify;

pub(crate) const REGISTER_SUCCESS: &str = "Registration successful";
pub(crate) const REGISTER_FAILED: &str = "Error occurred";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub(crate) const MISSING_FIELDS: &str = "Fill in email, password and confirmation.";

/// Required-field and confirmation checks, in that order.
pub(crate) fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if password != confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match validate_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(req) => req,
            Err(msg) => {
                notify::error(toasts, msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&req).await {
                    Ok(()) => {
                        notify::success(toasts, REGISTER_SUCCESS);
                        gloo_timers::future::sleep(crate::config::REDIRECT_DELAY).await;
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        notify::report_failure(toasts, &err, REGISTER_FAILED);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, api, &navigate);
    };

    let password_input = move |value: RwSignal<String>, visible: RwSignal<bool>, name: &'static str| {
        view! {
            <span class="auth-input-wrapper">
                <input
                    class="auth-input"
                    name=name
                    type=move || if visible.get() { "text" } else { "password" }
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    class="auth-eye"
                    type="button"
                    title="Toggle password visibility"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </span>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            name="email"
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        {password_input(password, show_password, "password")}
                    </label>
                    <label class="auth-label">
                        "Confirm Password"
                        {password_input(confirm_password, show_confirm, "confirmPassword")}
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a class="auth-link" href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
