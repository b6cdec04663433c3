//! Session gate wrapped around every routed page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;
use crate::util::auth::{AppRoute, RouteAccess, route_access};

/// Render `children` only when the session may see `route`; otherwise
/// redirect, or hold a placeholder until the session has been read.
#[component]
pub fn RouteGuard(route: AppRoute, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let access = Memo::new(move |_| route_access(route, &session.get()));

    move || match access.get() {
        RouteAccess::Pending => view! { <div class="route-pending">"Loading..."</div> }.into_any(),
        RouteAccess::Allow => children.as_ref().map(|c| c()).into_any(),
        RouteAccess::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
