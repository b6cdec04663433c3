//! Compile-time client configuration.
//!
//! The remote API lives outside this repository; its base address is baked in
//! at build time from `ADMIN_CONSOLE_API_URL` so the same WASM bundle can be
//! pointed at different backends without a runtime config fetch.

use std::time::Duration;

/// Fallback API base address used when `ADMIN_CONSOLE_API_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Base address of the remote user API.
pub const API_BASE_URL: &str = match option_env!("ADMIN_CONSOLE_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Pause between a successful auth form submit and the follow-up navigation,
/// long enough for the success toast to register.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_TTL: Duration = Duration::from_millis(4000);

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// `localStorage` key holding the role returned at login.
pub const ROLE_KEY: &str = "role";
