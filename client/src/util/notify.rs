//! Toast helpers used by pages and the auth-invalidation handler.
//!
//! Each toast removes itself after `TOAST_TTL` in the browser; on the server
//! nothing is scheduled since SSR output never shows transient toasts.

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::toast::{ToastKind, ToastState};

pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::TOAST_TTL).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}

/// Surface a failed API call. Session invalidation is skipped: the global
/// handler already announced it and is redirecting to login.
pub fn report_failure(toasts: RwSignal<ToastState>, err: &ApiError, fallback: &str) {
    if err.is_auth_invalid() {
        return;
    }
    error(toasts, err.user_message(fallback));
}
