//! Browser `localStorage` access and cross-tab change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only web-sys glue so the session store can
//! stay backend-agnostic and testable with an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::config::{ROLE_KEY, TOKEN_KEY};

/// `KeyValueStore` over `window.localStorage`.
///
/// Looks the storage object up on every call, so the type stays zero-sized.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl crate::state::session::KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage set {key} failed: {e:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Whether a `storage` event with this key can change the session.
///
/// A `None` key means another tab called `localStorage.clear()`.
pub fn storage_event_touches_session(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == TOKEN_KEY || key == ROLE_KEY,
    }
}

/// Run `on_change` whenever another tab of this origin modifies the session
/// keys. Browsers do not deliver `storage` events to the tab that made the
/// write, so local changes must update state themselves.
#[cfg(feature = "hydrate")]
pub fn on_session_storage_change(on_change: impl Fn() + 'static) {
    use leptos::prelude::window_event_listener;

    let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
        if storage_event_touches_session(ev.key().as_deref()) {
            on_change();
        }
    });
    // The listener lives as long as the app; dropping the handle keeps it.
    drop(handle);
}
