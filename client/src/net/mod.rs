//! Networking modules for the remote user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps outbound HTTP calls (bearer injection, auth-invalidation
//! handling) and `types` defines the wire schema shared by pages and state.

pub mod api;
pub mod types;
