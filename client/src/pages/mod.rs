//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, API calls, toasts,
//! navigation) and delegates rendering details to `components`. Pages are
//! mounted behind `RouteGuard`, so they can assume the session matches.

pub mod login;
pub mod not_found;
pub mod register;
pub mod users;
