//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome (guards, toasts) and directory pieces
//! (rows, avatars, modals) while reading/writing shared state from Leptos
//! context providers or signals handed down by their page.

pub mod route_guard;
pub mod toast_stack;
pub mod user_avatar;
pub mod user_edit_modal;
pub mod user_row;
pub mod user_view_modal;
