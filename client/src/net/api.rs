//! REST adapter for the remote user API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! AUTH INVALIDATION
//! =================
//! Every request carries the stored token as a bearer credential. When any
//! response reports a missing or invalid token the adapter clears the stored
//! session and fires its invalidation hook, regardless of which call tripped
//! it. The hook is installed by the root component, which owns navigation;
//! the adapter itself never touches routing.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Server business errors keep
//! their message so forms can show it verbatim; everything else collapses to a
//! caller-chosen fallback via `ApiError::user_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest, User, UserUpdate};
use crate::state::session::SessionStore;

/// Server messages that mean the current session is no longer usable.
pub const INVALIDATION_MESSAGES: [&str; 2] = ["No token provided", "Invalid token"];

/// Replacement avatar attached to an update; only constructible in the browser.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type ImageFile = std::convert::Infallible;

/// Failure of a call through [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response carrying (optionally) a business message.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// The server no longer accepts the stored token.
    #[error("session invalidated: {message}")]
    AuthInvalid { message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_failure(status: u16, body: ErrorBody) -> Self {
        match body.message {
            Some(message) if is_invalidation_message(&message) => Self::AuthInvalid { message },
            message => Self::Rejected { status, message: message.filter(|m| !m.trim().is_empty()) },
        }
    }

    pub fn is_auth_invalid(&self) -> bool {
        matches!(self, Self::AuthInvalid { .. })
    }

    /// Text for a notification: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// `true` for the exact messages the API uses to reject a session.
pub fn is_invalidation_message(message: &str) -> bool {
    INVALIDATION_MESSAGES.contains(&message)
}

/// Join the base address and a request path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a stored token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Path of a single user record.
pub fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

type InvalidationHook = Arc<dyn Fn(&str) + Send + Sync>;

/// HTTP client bound to one API base address and one session store.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    on_invalidated: Option<InvalidationHook>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("has_invalidation_hook", &self.on_invalidated.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self { base_url: base_url.into(), session, on_invalidated: None }
    }

    /// Install the subscriber for auth-invalidation events. It receives the
    /// server message after the stored session has been cleared.
    #[must_use]
    pub fn with_invalidation_hook(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_invalidated = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Bearer credential for the next request, if a token is stored.
    pub fn authorization(&self) -> Option<String> {
        self.session.token().map(|t| bearer(&t))
    }

    /// Turn a failed response into an error, running the invalidation side
    /// effects when the server rejected the session.
    pub fn reject(&self, status: u16, body: ErrorBody) -> ApiError {
        let err = ApiError::from_failure(status, body);
        if let ApiError::AuthInvalid { message } = &err {
            self.invalidate(message);
        }
        err
    }

    fn invalidate(&self, message: &str) {
        self.session.clear();
        if let Some(hook) = &self.on_invalidated {
            hook(message);
        }
    }

    // -----------------------------------------------------------------
    // Verbs
    // -----------------------------------------------------------------

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Get, path).build();
            let response = self.dispatch(request).await?;
            decode(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body and decode a JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, path).json(body);
            let response = self.dispatch(request).await?;
            decode(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body, ignoring whatever the server replies with.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, path).json(body);
            self.dispatch(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` with no body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, path).build();
            self.dispatch(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT` a multipart form. The browser picks the boundary, so no
    /// `Content-Type` is set here.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    #[cfg(feature = "hydrate")]
    pub async fn put_form(&self, path: &str, form: &web_sys::FormData) -> Result<(), ApiError> {
        let request = self.builder(Verb::Put, path).body(form.clone());
        self.dispatch(request).await.map(drop)
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Delete, path).build();
            self.dispatch(request).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    // -----------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; bad credentials arrive as `Rejected`.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("/auth/login", req).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; duplicate accounts arrive as `Rejected`.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.post_discard("/auth/register", req).await
    }

    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the list cannot be fetched or decoded.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// `PUT /users/{id}` as multipart with an optional replacement avatar.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the form cannot be built or the update is
    /// rejected.
    pub async fn update_user(&self, id: &str, update: &UserUpdate, image: Option<ImageFile>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = build_form(update, image.as_ref())?;
            self.put_form(&user_path(id), &form).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update, image);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the delete is rejected.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&user_path(id)).await
    }

    /// `POST /logout`, used only to let the server record the sign-out.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; callers treat it as best-effort.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/logout").await
    }

    // -----------------------------------------------------------------
    // Transport
    // -----------------------------------------------------------------

    #[cfg(feature = "hydrate")]
    fn builder(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;

        let url = self.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let response = request
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let url = response.url();
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        let err = self.reject(status, body);
        log::warn!("api call {url} failed: {err}");
        Err(err)
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn build_form(update: &UserUpdate, image: Option<&web_sys::File>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in update.form_fields() {
        form.append_with_str(name, &value).map_err(js_err)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("profileImage", file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}
