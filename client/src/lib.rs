//! # admin-client
//!
//! Leptos + WASM frontend for the user-administration console.
//!
//! This crate contains the routed pages (login, register, user directory),
//! their components, session/directory state, the REST adapter for the remote
//! user API, and browser helpers for storage, notifications and export.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
