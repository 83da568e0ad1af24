//! REST calls to the DMM authentication and registry service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! fixed timeout. Server-side (SSR): stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call attaches the stored token as `x-token`. A 401 from any endpoint
//! clears the stored session before the error reaches the caller, which then
//! routes to login (`components::toast_stack::report_api_error`). Nothing is
//! retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

#[cfg(any(test, feature = "hydrate"))]
use super::error::SESSION_EXPIRED_MESSAGE;
use super::error::ApiError;
use super::types::{Employee, RegisterRequest, RegistryUser};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, PasswordResetRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{AuthResponse, EmployeesResponse, ErrorBody, UsersResponse};
use crate::state::session::{SessionRecord, SessionStore};
use crate::util::auth::sign_out;

/// Used when `DMM_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/dmmsystem/v1";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "x-token";

#[cfg(any(test, feature = "hydrate"))]
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Base URL of the auth service for this build.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("DMM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `x-token` header for the stored session, if any.
#[cfg(any(test, feature = "hydrate"))]
fn token_header(store: &dyn SessionStore) -> Option<(&'static str, String)> {
    store.load().map(|session| (TOKEN_HEADER, session.token))
}

/// Map a non-2xx status and its body to an `ApiError`.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: &str) -> ApiError {
    let msg = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { msg: Some(msg) }) if !msg.trim().is_empty() => Some(msg),
        _ => None,
    };
    if status == 401 {
        let message = msg.unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_owned());
        return ApiError::Unauthorized { message };
    }
    let message = msg.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());
    ApiError::Status { status, message }
}

/// Turn a completed exchange into the success body or an error. A 401 drops
/// the stored session.
#[cfg(any(test, feature = "hydrate"))]
fn finish_response(
    store: &dyn SessionStore,
    path: &str,
    status: u16,
    body: String,
) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let err = error_for_status(status, &body);
    if err.is_unauthorized() {
        handle_auth_failure(store);
    } else {
        leptos::logging::warn!("api: {path} failed with {status}");
    }
    Err(err)
}

/// Extract the session from a login/register success body.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_body(body: &str) -> Result<SessionRecord, ApiError> {
    let resp: AuthResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    resp
        .auth_details
        .into_session()
        .ok_or_else(|| ApiError::Decode("authDetails missing role or token".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn users_from_body(body: &str) -> Result<Vec<RegistryUser>, ApiError> {
    let resp: UsersResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(resp.users)
}

#[cfg(any(test, feature = "hydrate"))]
fn employees_from_body(body: &str) -> Result<Vec<Employee>, ApiError> {
    let resp: EmployeesResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(resp.employees)
}

/// Path of the registry search endpoint for a free-text query.
#[cfg(any(test, feature = "hydrate"))]
fn search_path(query: &str) -> String {
    format!("/users/buscar/{}", urlencoding::encode(query.trim()))
}

/// React to an authorization failure from the API: drop the session and
/// return the login path to navigate to.
pub fn handle_auth_failure(store: &dyn SessionStore) -> &'static str {
    leptos::logging::warn!("api: token rejected, clearing session");
    sign_out(store)
}

/// Attach the session token, then run the request and read its body within
/// `REQUEST_TIMEOUT`.
#[cfg(feature = "hydrate")]
async fn execute(
    store: &dyn SessionStore,
    path: &str,
    builder: gloo_net::http::RequestBuilder,
    payload: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    use futures::future::{Either, select};

    let builder = match token_header(store) {
        Some((name, value)) => builder.header(name, &value),
        None => builder,
    };
    let request = match payload {
        Some(payload) => builder.json(payload),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let exchange = Box::pin(async move {
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok::<_, ApiError>((status, body))
    });
    let timeout = Box::pin(gloo_timers::future::sleep(REQUEST_TIMEOUT));
    let (status, body) = match select(exchange, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(_) => return Err(ApiError::Timeout(REQUEST_TIMEOUT.as_secs())),
    };
    finish_response(store, path, status, body)
}

#[cfg(feature = "hydrate")]
async fn get_json(store: &dyn SessionStore, path: &str) -> Result<String, ApiError> {
    let url = endpoint(api_base_url(), path);
    execute(store, path, gloo_net::http::Request::get(&url), None).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(
    store: &dyn SessionStore,
    path: &str,
    payload: &T,
) -> Result<String, ApiError> {
    let payload = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    let url = endpoint(api_base_url(), path);
    execute(store, path, gloo_net::http::Request::post(&url), Some(&payload)).await
}

/// Authenticate with email and password via `POST /auth/login`.
///
/// The returned session is not persisted; pass it to
/// `util::auth::complete_login`.
///
/// # Errors
///
/// Returns an error on network failure, timeout, a non-2xx response, or a
/// success body without a usable session.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn login(
    store: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<SessionRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let body = post_json(store, "/auth/login", &payload).await?;
        session_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Same failure modes as [`login`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn register(
    store: &dyn SessionStore,
    request: &RegisterRequest,
) -> Result<SessionRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_json(store, "/auth/register", request).await?;
        session_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the service to email password-recovery instructions via
/// `POST /auth/forgot-password`.
///
/// # Errors
///
/// Returns an error on network failure, timeout, or a non-2xx response.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn request_password_reset(
    store: &dyn SessionStore,
    email: &str,
    phone: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = PasswordResetRequest { email: email.to_owned(), phone: phone.to_owned() };
        post_json(store, "/auth/forgot-password", &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Every registered child/family record via `GET /users`.
///
/// # Errors
///
/// Returns an error on network failure, timeout, a non-2xx response, or an
/// undecodable body.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn list_users(store: &dyn SessionStore) -> Result<Vec<RegistryUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(store, "/users").await?;
        users_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Registry records matching a DPI or name via `GET /users/buscar/:query`.
///
/// # Errors
///
/// Same failure modes as [`list_users`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn search_users(
    store: &dyn SessionStore,
    query: &str,
) -> Result<Vec<RegistryUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(store, &search_path(query)).await?;
        users_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Staff accounts via `GET /auth`.
///
/// # Errors
///
/// Same failure modes as [`list_users`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn list_employees(store: &dyn SessionStore) -> Result<Vec<Employee>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(store, "/auth").await?;
        employees_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
