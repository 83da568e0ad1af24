use super::*;
use crate::state::session::{KeyValueSessionStore, Role};
use crate::util::auth::LOGIN_PATH;
use crate::util::storage::MemoryStorageBackend;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint(DEFAULT_API_BASE_URL, "/auth/login"),
        "http://localhost:3000/dmmsystem/v1/auth/login"
    );
    assert_eq!(endpoint("http://api.test/v1/", "/auth/register"), "http://api.test/v1/auth/register");
}

#[test]
fn request_timeout_is_five_seconds() {
    assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(5));
}

// =============================================================
// error_for_status
// =============================================================

#[test]
fn status_401_keeps_service_message() {
    let err = error_for_status(401, r#"{"msg":"Credenciales incorrectas"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Credenciales incorrectas");
}

#[test]
fn status_401_without_message_reads_as_expired_session() {
    let err = error_for_status(401, "");
    assert_eq!(err, ApiError::Unauthorized { message: SESSION_EXPIRED_MESSAGE.to_owned() });
}

#[test]
fn status_error_uses_body_msg() {
    assert_eq!(
        error_for_status(400, r#"{"msg":"Usuario no encontrado"}"#),
        ApiError::Status { status: 400, message: "Usuario no encontrado".to_owned() }
    );
}

#[test]
fn status_error_without_msg_is_unknown() {
    assert_eq!(
        error_for_status(500, "<html>oops</html>"),
        ApiError::Status { status: 500, message: "Unknown error".to_owned() }
    );
    assert_eq!(
        error_for_status(404, r#"{"msg":"  "}"#),
        ApiError::Status { status: 404, message: "Unknown error".to_owned() }
    );
}

#[test]
fn status_error_displays_message_only() {
    let err = error_for_status(400, r#"{"msg":"Credenciales incorrectas"}"#);
    assert_eq!(err.to_string(), "Credenciales incorrectas");
}

// =============================================================
// session_from_body
// =============================================================

#[test]
fn session_from_body_reads_auth_details() {
    let body = r#"{"msg":"ok","authDetails":{"role":"EMPLOYEE_ROLE","token":"abc","username":"ana"}}"#;
    let session = session_from_body(body).unwrap();
    assert_eq!(session.role, Role::Employee);
    assert_eq!(session.token, "abc");
}

#[test]
fn session_from_body_rejects_flat_shape() {
    let err = session_from_body(r#"{"role":"ADMIN_ROLE","token":"abc"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn session_from_body_rejects_incomplete_details() {
    let err = session_from_body(r#"{"authDetails":{"role":"ADMIN_ROLE"}}"#).unwrap_err();
    assert_eq!(err, ApiError::Decode("authDetails missing role or token".to_owned()));
}

// =============================================================
// Token header and response handling
// =============================================================

fn store_with_session() -> KeyValueSessionStore<MemoryStorageBackend> {
    let store = KeyValueSessionStore::new(MemoryStorageBackend::new());
    store.save(&SessionRecord::new(Role::Employee, "tok-123"));
    store
}

#[test]
fn stored_session_sends_token_header() {
    let store = store_with_session();
    assert_eq!(token_header(&store), Some(("x-token", "tok-123".to_owned())));
}

#[test]
fn no_session_sends_no_token_header() {
    let store = KeyValueSessionStore::new(MemoryStorageBackend::new());
    assert_eq!(token_header(&store), None);
}

#[test]
fn success_status_returns_body_and_keeps_session() {
    let store = store_with_session();
    let body = finish_response(&store, "/users", 200, r#"{"users":[]}"#.to_owned()).unwrap();
    assert_eq!(body, r#"{"users":[]}"#);
    assert!(store.load().is_some());
}

#[test]
fn unauthorized_response_clears_session() {
    let store = store_with_session();
    let err = finish_response(&store, "/users", 401, r#"{"msg":"Token no valido"}"#.to_owned())
        .unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: "Token no valido".to_owned() });
    assert_eq!(store.load(), None);
}

#[test]
fn other_error_status_keeps_session() {
    let store = store_with_session();
    let err = finish_response(&store, "/users", 400, r#"{"msg":"bad"}"#.to_owned()).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: "bad".to_owned() });
    assert_eq!(store.load(), Some(SessionRecord::new(Role::Employee, "tok-123")));
}

// =============================================================
// Registry endpoints
// =============================================================

#[test]
fn search_path_encodes_query() {
    assert_eq!(search_path("1234567890101"), "/users/buscar/1234567890101");
    assert_eq!(search_path(" Luis Pérez "), "/users/buscar/Luis%20P%C3%A9rez");
    assert_eq!(search_path("a/b"), "/users/buscar/a%2Fb");
}

#[test]
fn users_from_body_reads_list() {
    let users = users_from_body(r#"{"success":true,"users":[{"numero":1},{"numero":2}]}"#).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].number, Some(2));
}

#[test]
fn users_from_body_rejects_non_json() {
    assert!(matches!(users_from_body("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn employees_from_body_reads_list() {
    let employees =
        employees_from_body(r#"{"employees":[{"username":"ana","role":"ADMIN_ROLE"}]}"#).unwrap();
    assert_eq!(employees[0].role(), Role::Admin);
}

// =============================================================
// Authorization failure
// =============================================================

#[test]
fn handle_auth_failure_clears_session_and_routes_to_login() {
    let store = KeyValueSessionStore::new(MemoryStorageBackend::new());
    store.save(&SessionRecord::new(Role::Admin, "expired"));
    assert_eq!(handle_auth_failure(&store), LOGIN_PATH);
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let store = KeyValueSessionStore::new(MemoryStorageBackend::new());
    let result = block_on_ready(login(&store, "a@b.co", "secret123"));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = block_on_ready(list_users(&store));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that is known to complete without suspending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
