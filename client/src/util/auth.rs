//! Route guarding and role-based dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes, the login/register pages and the dashboard redirect page
//! all route through these helpers so every entry point applies identical
//! redirect rules. Nothing here is cached: callers re-evaluate on every
//! navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::session::{Role, SessionHandle, SessionRecord, SessionStore};

pub const LOGIN_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_LANDING_PATH: &str = "/admin";
pub const EMPLOYEE_LANDING_PATH: &str = "/users";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Cosmetic pause on the dashboard redirect page before dispatching.
pub const DASHBOARD_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// Outcome of guarding a single navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectLogin,
    RedirectUnauthorized,
}

impl GuardDecision {
    /// Where to send the user, or `None` when the view may render.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Decide whether a view restricted to `allowed` roles may render.
///
/// Loading the session purges corrupt records as a side effect.
pub fn evaluate_guard(store: &dyn SessionStore, allowed: &[Role]) -> GuardDecision {
    let Some(session) = store.load() else {
        leptos::logging::warn!("guard: no session, redirecting to login");
        return GuardDecision::RedirectLogin;
    };
    decide_for_session(&session, allowed)
}

fn decide_for_session(session: &SessionRecord, allowed: &[Role]) -> GuardDecision {
    if !session.role.is_recognized() {
        leptos::logging::warn!("guard: unrecognized role {:?}", session.role.as_str());
        return GuardDecision::RedirectUnauthorized;
    }
    if !allowed.contains(&session.role) {
        leptos::logging::warn!("guard: role {} not in {}", session.role, format_roles(allowed));
        return GuardDecision::RedirectUnauthorized;
    }
    leptos::logging::log!("guard: access granted for {}", session.role);
    GuardDecision::Render
}

fn format_roles(roles: &[Role]) -> String {
    let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
    format!("[{}]", names.join(", "))
}

/// Landing view for a freshly authenticated role.
#[must_use]
pub fn landing_path(role: &Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LANDING_PATH,
        Role::Employee => EMPLOYEE_LANDING_PATH,
        Role::Other(_) => UNAUTHORIZED_PATH,
    }
}

/// Persist a session returned by the auth service and pick its landing view.
pub fn complete_login(store: &dyn SessionStore, record: &SessionRecord) -> &'static str {
    store.save(record);
    let target = landing_path(&record.role);
    leptos::logging::log!("login: role {} dispatched to {target}", record.role);
    target
}

/// A navigation to perform after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRedirect {
    pub path: &'static str,
    pub delay: Duration,
}

/// Target of the dashboard redirect page: login right away without a
/// session, otherwise the role's landing view after the display delay.
pub fn dashboard_redirect(store: &dyn SessionStore) -> PendingRedirect {
    match store.load() {
        None => PendingRedirect { path: LOGIN_PATH, delay: Duration::ZERO },
        Some(session) => {
            PendingRedirect { path: landing_path(&session.role), delay: DASHBOARD_REDIRECT_DELAY }
        }
    }
}

/// Drop the session and return the login path.
pub fn sign_out(store: &dyn SessionStore) -> &'static str {
    store.clear();
    LOGIN_PATH
}

/// Where to send the user after an API failure. A rejected token means the
/// session is already gone, so only login makes sense.
#[must_use]
pub fn redirect_for_error(err: &ApiError) -> Option<&'static str> {
    err.is_unauthorized().then_some(LOGIN_PATH)
}

/// Session store from Leptos context.
///
/// # Panics
///
/// Panics if called outside the `App` tree, which provides the store.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
