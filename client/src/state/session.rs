//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and role live in `localStorage`, shared by every tab of
//! the origin. `SessionStore` is the only code that reads or writes those
//! keys; `SessionState` is the derived, observable flag the route guards and
//! pages react to. The root component provides it as `RwSignal<SessionState>`
//! and recomputes it at startup, after login, and on cross-tab storage events.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::{ROLE_KEY, TOKEN_KEY};
use crate::net::api::ApiError;
use crate::net::types::LoginResponse;

/// Derived authentication flag for route guards and user-aware views.
///
/// `resolved` stays `false` during SSR and until the browser has read
/// storage, so server markup and the first hydrated render agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub resolved: bool,
    pub authenticated: bool,
    pub role: Option<String>,
}

impl SessionState {
    /// State before storage has been consulted.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn signed_in(role: Option<String>) -> Self {
        Self { resolved: true, authenticated: true, role }
    }

    pub fn signed_out() -> Self {
        Self { resolved: true, authenticated: false, role: None }
    }
}

/// String key/value backend for session persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process backend used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Reads and writes the persisted session (token + role).
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by `localStorage` in the browser and by a throwaway
    /// in-memory map on the server.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(crate::util::storage::BrowserStorage)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryStorage::default())
        }
    }

    /// Stored bearer token; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn role(&self) -> Option<String> {
        self.backend.get(ROLE_KEY).filter(|r| !r.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Current persisted session as a resolved `SessionState`.
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::signed_in(self.role())
        } else {
            SessionState::signed_out()
        }
    }

    /// Persist the credentials returned by a successful login.
    pub fn store_login(&self, resp: &LoginResponse) {
        self.backend.set(TOKEN_KEY, &resp.token);
        self.backend.set(ROLE_KEY, &resp.role);
    }

    /// Remove token and role together.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
    }
}

/// Fold a login outcome into the store.
///
/// Credentials are written only on success; a failed attempt leaves storage
/// untouched and hands the error back for the form to display.
///
/// # Errors
///
/// Returns the API error unchanged when the login call failed.
pub fn apply_login(store: &SessionStore, outcome: Result<LoginResponse, ApiError>) -> Result<SessionState, ApiError> {
    let resp = outcome?;
    if resp.token.trim().is_empty() {
        return Err(ApiError::Decode("login response carried an empty token".to_owned()));
    }
    store.store_login(&resp);
    Ok(store.state())
}
