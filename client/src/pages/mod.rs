//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (API calls, redirects) and
//! delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod dashboard_redirect;
pub mod login;
pub mod register;
pub mod unauthorized;
pub mod user_list;
