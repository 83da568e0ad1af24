use super::*;
use crate::state::session::{KeyValueSessionStore, SESSION_KEY};
use crate::util::storage::{MemoryStorageBackend, StorageBackend};

fn store_with(record: Option<SessionRecord>) -> KeyValueSessionStore<MemoryStorageBackend> {
    let store = KeyValueSessionStore::new(MemoryStorageBackend::new());
    if let Some(record) = record {
        store.save(&record);
    }
    store
}

fn store_with_raw(raw: &str) -> KeyValueSessionStore<MemoryStorageBackend> {
    KeyValueSessionStore::new(MemoryStorageBackend::new().with_raw(SESSION_KEY, raw))
}

const ALL_ROLE_SETS: &[&[Role]] = &[
    &[],
    &[Role::Admin],
    &[Role::Employee],
    &[Role::Employee, Role::Admin],
];

// =============================================================
// evaluate_guard
// =============================================================

#[test]
fn absent_session_redirects_to_login_for_every_role_set() {
    let store = store_with(None);
    for allowed in ALL_ROLE_SETS {
        assert_eq!(evaluate_guard(&store, allowed), GuardDecision::RedirectLogin);
    }
}

#[test]
fn renders_iff_role_in_allowed_set() {
    for role in [Role::Admin, Role::Employee] {
        for allowed in ALL_ROLE_SETS {
            let store = store_with(Some(SessionRecord::new(role.clone(), "abc")));
            let expected = if allowed.contains(&role) {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectUnauthorized
            };
            assert_eq!(evaluate_guard(&store, allowed), expected, "role {role} allowed {allowed:?}");
        }
    }
}

#[test]
fn employee_on_admin_view_is_unauthorized() {
    let store = store_with_raw(r#"{"role":"EMPLOYEE_ROLE","token":"abc"}"#);
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::RedirectUnauthorized);
}

#[test]
fn admin_on_shared_view_renders() {
    let store = store_with_raw(r#"{"role":"ADMIN_ROLE","token":"abc"}"#);
    assert_eq!(evaluate_guard(&store, &[Role::Employee, Role::Admin]), GuardDecision::Render);
}

#[test]
fn role_without_token_redirects_to_login_and_clears_storage() {
    let store = store_with_raw(r#"{"role":"ADMIN_ROLE"}"#);
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::RedirectLogin);
    assert_eq!(store.backend().get(SESSION_KEY), None);
}

#[test]
fn corrupt_session_redirects_to_login_and_clears_storage() {
    let store = store_with_raw("]]");
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::RedirectLogin);
    assert_eq!(store.backend().get(SESSION_KEY), None);
}

#[test]
fn unrecognized_role_is_unauthorized_even_if_listed() {
    let store = store_with_raw(r#"{"role":"GUEST","token":"abc"}"#);
    let allowed = [Role::from("GUEST"), Role::Admin];
    assert_eq!(evaluate_guard(&store, &allowed), GuardDecision::RedirectUnauthorized);
}

#[test]
fn empty_role_is_unauthorized() {
    let store = store_with_raw(r#"{"role":"","token":"abc"}"#);
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::RedirectUnauthorized);
}

#[test]
fn guard_reevaluates_after_session_changes() {
    let store = store_with(Some(SessionRecord::new(Role::Admin, "abc")));
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::Render);
    store.clear();
    assert_eq!(evaluate_guard(&store, &[Role::Admin]), GuardDecision::RedirectLogin);
}

#[test]
fn redirect_paths_per_decision() {
    assert_eq!(GuardDecision::Render.redirect_path(), None);
    assert_eq!(GuardDecision::RedirectLogin.redirect_path(), Some(LOGIN_PATH));
    assert_eq!(GuardDecision::RedirectUnauthorized.redirect_path(), Some(UNAUTHORIZED_PATH));
}

// =============================================================
// Post-login dispatch
// =============================================================

#[test]
fn landing_path_per_role() {
    assert_eq!(landing_path(&Role::Admin), ADMIN_LANDING_PATH);
    assert_eq!(landing_path(&Role::Employee), EMPLOYEE_LANDING_PATH);
    assert_eq!(landing_path(&Role::from("GUEST")), UNAUTHORIZED_PATH);
}

#[test]
fn complete_login_persists_and_dispatches() {
    let store = store_with(None);
    let record = SessionRecord::new(Role::Admin, "abc").with_username("ana");
    assert_eq!(complete_login(&store, &record), ADMIN_LANDING_PATH);
    assert_eq!(store.load(), Some(record));
}

#[test]
fn complete_login_with_unknown_role_goes_to_unauthorized() {
    let store = store_with(None);
    let record = SessionRecord::new("GUEST", "abc");
    assert_eq!(complete_login(&store, &record), UNAUTHORIZED_PATH);
}

#[test]
fn complete_login_overwrites_previous_session() {
    let store = store_with(Some(SessionRecord::new(Role::Admin, "old")));
    let record = SessionRecord::new(Role::Employee, "new");
    assert_eq!(complete_login(&store, &record), EMPLOYEE_LANDING_PATH);
    assert_eq!(store.load(), Some(record));
}

#[test]
fn dashboard_redirect_without_session_goes_to_login_immediately() {
    let store = store_with(None);
    assert_eq!(
        dashboard_redirect(&store),
        PendingRedirect { path: LOGIN_PATH, delay: Duration::ZERO }
    );
}

#[test]
fn dashboard_redirect_with_session_waits_then_dispatches() {
    let store = store_with(Some(SessionRecord::new(Role::Employee, "abc")));
    assert_eq!(
        dashboard_redirect(&store),
        PendingRedirect { path: EMPLOYEE_LANDING_PATH, delay: DASHBOARD_REDIRECT_DELAY }
    );
}

#[test]
fn sign_out_clears_and_returns_login() {
    let store = store_with(Some(SessionRecord::new(Role::Admin, "abc")));
    assert_eq!(sign_out(&store), LOGIN_PATH);
    assert_eq!(store.load(), None);
    assert_eq!(sign_out(&store), LOGIN_PATH);
}

// =============================================================
// API failure routing
// =============================================================

#[test]
fn rejected_token_routes_to_login() {
    let err = ApiError::Unauthorized { message: "Token no valido".to_owned() };
    assert_eq!(redirect_for_error(&err), Some(LOGIN_PATH));
}

#[test]
fn other_api_failures_stay_on_page() {
    let status = ApiError::Status { status: 400, message: "bad".to_owned() };
    assert_eq!(redirect_for_error(&status), None);
    assert_eq!(redirect_for_error(&ApiError::Timeout(5)), None);
    assert_eq!(redirect_for_error(&ApiError::Network("offline".to_owned())), None);
}
