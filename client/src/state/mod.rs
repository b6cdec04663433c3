//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `directory`, `toast`, with
//! `directory_sync` driving list mutations) so pages and
//! components depend on small focused models. Each model is a plain struct
//! wrapped in an `RwSignal` and provided through Leptos context by `App`.

pub mod directory;
pub mod directory_sync;
pub mod session;
pub mod toast;
