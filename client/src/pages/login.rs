//! Login page: email + password against `POST /auth/login`.
//!
//! On success the token and role are persisted, a success toast is shown,
//! and after `REDIRECT_DELAY` the session flips and the directory opens.
//! On failure the form keeps its values for another attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::REGISTER_PATH;
use crate::util::notify;

pub(crate) const LOGIN_SUCCESS: &str = "Login successful!";
pub(crate) const LOGIN_FAILED: &str = "Login failed";
pub(crate) const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is sent as typed.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match validate_login(&email.get_untracked(), &password.get_untracked()) {
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
                let outcome = api.login(&req).await;
                match crate::state::session::apply_login(api.session(), outcome) {
                    Ok(state) => {
                        notify::success(toasts, LOGIN_SUCCESS);
                        gloo_timers::future::sleep(crate::config::REDIRECT_DELAY).await;
                        session.set(state);
                        navigate(crate::util::auth::USERS_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::info!("login rejected: {err}");
                        notify::report_failure(toasts, &err, LOGIN_FAILED);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, api, session, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            name="email"
                            type="email"
                            placeholder="Enter email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <span class="auth-input-wrapper">
                            <input
                                class="auth-input"
                                name="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-eye"
                                type="button"
                                title="Toggle password visibility"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a class="auth-link" href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
