//! Wire DTOs for the authentication service.
//!
//! DESIGN
//! ======
//! The service wraps session fields in an `authDetails` object. That wrapper
//! is unwrapped here, once, into the flat `SessionRecord` the rest of the
//! client stores and reads.
//!
//! Registry and employee records keep the service's field names on the wire
//! and tolerate any field being absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, SessionRecord};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub password: String,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
    pub phone: String,
}

/// Successful login/register response.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "authDetails")]
    pub auth_details: AuthDetails,
}

/// Session fields as sent by the service. Extra fields (email, id, ...) are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AuthDetails {
    pub role: Option<String>,
    pub token: Option<String>,
    pub username: Option<String>,
}

impl AuthDetails {
    /// Convert to a session record; `None` when role or token is missing.
    #[must_use]
    pub fn into_session(self) -> Option<SessionRecord> {
        let role = Role::from(self.role?);
        let token = self.token.filter(|t| !t.is_empty())?;
        Some(SessionRecord { role, token, username: self.username })
    }
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub msg: Option<String>,
}

/// Registered child/family record from `GET /users` and `GET /users/buscar/:q`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryUser {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<u64>,
    /// Guardian in charge (`nombreE`).
    #[serde(rename = "nombreE")]
    pub guardian_name: Option<String>,
    /// Registered child (`nombreN`).
    #[serde(rename = "nombreN")]
    pub child_name: Option<String>,
    #[serde(rename = "DPI")]
    pub dpi: Option<String>,
    #[serde(rename = "comunidad")]
    pub community: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
}

/// Envelope of the registry list and search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<RegistryUser>,
}

/// Staff account from `GET /auth`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    /// Active flag; absent reads as inactive.
    pub status: bool,
}

impl Employee {
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from(self.role.clone().unwrap_or_default())
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_owned()
    }
}

/// Envelope of the employee list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
}
