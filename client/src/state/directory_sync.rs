//! Directory mutations and the full re-fetch that follows each of them.
//!
//! The cached list is never patched locally: a successful edit or delete is
//! followed by exactly one `GET /users`, and a failed mutation issues no
//! fetch at all. The functions run against any [`UserDirectory`], which the
//! real [`ApiClient`] implements.

#[cfg(test)]
#[path = "directory_sync_test.rs"]
mod directory_sync_test;

use leptos::prelude::*;

use super::directory::{DirectoryState, EditDraft};
use crate::net::api::{ApiClient, ApiError, ImageFile};
use crate::net::types::{User, UserUpdate};

pub const FETCH_FAILED: &str = "Failed to fetch users";

/// User endpoints the directory page depends on.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn update_user(&self, id: &str, update: &UserUpdate, image: Option<ImageFile>) -> Result<(), ApiError>;
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;
}

impl UserDirectory for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        ApiClient::list_users(self).await
    }

    async fn update_user(&self, id: &str, update: &UserUpdate, image: Option<ImageFile>) -> Result<(), ApiError> {
        ApiClient::update_user(self, id, update, image).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete_user(self, id).await
    }
}

/// Which half of a mutate-then-refresh sequence failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The mutation was rejected; no re-fetch was issued.
    #[error("mutation failed: {0}")]
    Mutation(ApiError),
    /// The mutation succeeded but the follow-up fetch did not.
    #[error("refresh failed: {0}")]
    Refresh(ApiError),
}

impl SyncError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            Self::Mutation(err) | Self::Refresh(err) => err,
        }
    }
}

/// Replace the cached list with one fresh fetch. On failure the previous
/// rows stay and the error text is recorded.
///
/// # Errors
///
/// Returns the [`ApiError`] of the failed `GET /users`.
pub async fn refresh<A: UserDirectory>(api: &A, directory: RwSignal<DirectoryState>) -> Result<(), ApiError> {
    let _ = directory.try_update(DirectoryState::begin_fetch);
    match api.list_users().await {
        Ok(users) => {
            let _ = directory.try_update(|d| d.apply_fetch(users));
            Ok(())
        }
        Err(err) => {
            let _ = directory.try_update(|d| d.fail_fetch(err.user_message(FETCH_FAILED)));
            Err(err)
        }
    }
}

/// `DELETE /users/{id}`, then re-fetch.
///
/// # Errors
///
/// Returns [`SyncError::Mutation`] if the delete is rejected and
/// [`SyncError::Refresh`] if only the follow-up fetch fails.
pub async fn delete_then_refresh<A: UserDirectory>(
    api: &A,
    directory: RwSignal<DirectoryState>,
    id: &str,
) -> Result<(), SyncError> {
    api.delete_user(id).await.map_err(SyncError::Mutation)?;
    refresh(api, directory).await.map_err(SyncError::Refresh)
}

/// Submit `draft`, close the modal and re-fetch. A rejected update leaves
/// the modal open with the draft intact.
///
/// # Errors
///
/// Returns [`SyncError::Mutation`] if the update is rejected and
/// [`SyncError::Refresh`] if only the follow-up fetch fails.
pub async fn save_then_refresh<A: UserDirectory>(
    api: &A,
    directory: RwSignal<DirectoryState>,
    draft: &EditDraft,
    image: Option<ImageFile>,
) -> Result<(), SyncError> {
    if let Err(err) = api.update_user(&draft.id, &draft.to_update(), image).await {
        let _ = directory.try_update(DirectoryState::save_failed);
        return Err(SyncError::Mutation(err));
    }
    let _ = directory.try_update(DirectoryState::save_succeeded);
    refresh(api, directory).await.map_err(SyncError::Refresh)
}
