//! Router assembly.
//!
//! The admin console is a Leptos app: every page is server-rendered and then
//! hydrated by the WASM bundle under `/pkg`. The user API it talks to lives
//! elsewhere, so the only non-Leptos route here is the health probe.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// SSR pages, static assets and the health probe behind tracing and gzip.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(admin_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || admin_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(admin_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
