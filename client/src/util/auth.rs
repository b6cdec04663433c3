//! Route guarding and session teardown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page goes through `route_access` so login/register are only
//! reachable signed out and the directory only signed in. Teardown helpers
//! are shared by explicit logout and by the API adapter's invalidation hook.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::session::{SessionState, SessionStore};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const USERS_PATH: &str = "/users";

/// Routed screens of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Users,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Root => ROOT_PATH,
            AppRoute::Login => LOGIN_PATH,
            AppRoute::Register => REGISTER_PATH,
            AppRoute::Users => USERS_PATH,
        }
    }
}

/// Outcome of guarding a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session not read yet (SSR or before hydration finished).
    Pending,
    Allow,
    Redirect(&'static str),
}

pub fn route_access(route: AppRoute, session: &SessionState) -> RouteAccess {
    if !session.resolved {
        return RouteAccess::Pending;
    }
    let home = if session.authenticated { USERS_PATH } else { LOGIN_PATH };
    match (route, session.authenticated) {
        (AppRoute::Root, _) => RouteAccess::Redirect(home),
        (AppRoute::Login | AppRoute::Register, false) | (AppRoute::Users, true) => RouteAccess::Allow,
        (AppRoute::Login | AppRoute::Register, true) | (AppRoute::Users, false) => RouteAccess::Redirect(home),
    }
}

/// Drop the persisted session and flip the observable flag. Guards react to
/// the flip, so any guarded page falls through to `/login` client-side.
pub fn end_session(store: &SessionStore, session: RwSignal<SessionState>) {
    store.clear();
    let _ = session.try_set(SessionState::signed_out());
}
