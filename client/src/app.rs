//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::components::toast_stack::ToastStack;
use crate::config::API_BASE_URL;
use crate::net::api::ApiClient;
use crate::pages::{
    login::LoginPage, not_found::NotFoundPage, register::RegisterPage, users::UsersPage,
};
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::ToastState;
use crate::util::auth::AppRoute;
use crate::util::notify;

pub(crate) const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Flip the session to signed-out after the API rejected the token. The
/// expiry toast is shown only if this tab still believed it was signed in.
fn handle_invalidation(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    let was_signed_in = session.try_get_untracked().is_some_and(|s| s.authenticated);
    let _ = session.try_set(SessionState::signed_out());
    if was_signed_in {
        notify::error(toasts, SESSION_EXPIRED);
    }
}

/// Root application component.
///
/// Provides the session, toast and API client contexts and sets up routing.
/// The session starts unresolved so server and browser render the same
/// placeholder; the browser resolves it from storage once mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let session = RwSignal::new(SessionState::pending());
    let toasts = RwSignal::new(ToastState::default());
    let api = ApiClient::new(API_BASE_URL, store.clone())
        .with_invalidation_hook(move |message| {
            #[cfg(feature = "hydrate")]
            log::warn!("session invalidated: {message}");
            #[cfg(not(feature = "hydrate"))]
            let _ = message;
            handle_invalidation(session, toasts);
        });

    provide_context(session);
    provide_context(toasts);
    provide_context(api);

    let startup_store = store.clone();
    Effect::new(move |_| {
        session.set(startup_store.state());
    });

    #[cfg(feature = "hydrate")]
    crate::util::storage::on_session_storage_change(move || {
        let _ = session.try_set(store.state());
    });
    #[cfg(not(feature = "hydrate"))]
    drop(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <ToastStack/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteGuard route=AppRoute::Root/> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RouteGuard route=AppRoute::Login><LoginPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RouteGuard route=AppRoute::Register><RegisterPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <RouteGuard route=AppRoute::Users><UsersPage/></RouteGuard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_announces_expiry_once() {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(SessionState::signed_in(Some("admin".to_owned())));
            let toasts = RwSignal::new(ToastState::default());

            handle_invalidation(session, toasts);
            handle_invalidation(session, toasts);

            assert_eq!(session.get_untracked(), SessionState::signed_out());
            let messages: Vec<String> = toasts.get_untracked().items.into_iter().map(|t| t.message).collect();
            assert_eq!(messages, vec![SESSION_EXPIRED.to_owned()]);
        });
    }

    #[test]
    fn invalidation_while_signed_out_is_silent() {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(SessionState::signed_out());
            let toasts = RwSignal::new(ToastState::default());
            handle_invalidation(session, toasts);
            assert!(toasts.get_untracked().items.is_empty());
        });
    }
}
