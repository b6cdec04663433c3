//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (storage, downloads, timers) and pure helpers for routing,
//! dates and spreadsheet rows, kept apart from page and component code.

pub mod auth;
pub mod datetime;
pub mod export;
pub mod notify;
pub mod storage;
