//! Persisted login session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, the post-login dispatcher and the API client all read the
//! session through the `SessionStore` trait object provided via Leptos
//! context, so tests can swap in memory-backed storage.
//!
//! INVARIANTS
//! ==========
//! A stored record is valid only when it carries both `role` and a non-empty
//! `token`. Anything else under the key (unparseable JSON, half a record) is
//! purged on read and reported as absent. Role strings themselves are not
//! validated here; unknown roles are the guard's concern.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::util::storage::{LocalStorageBackend, StorageBackend};

/// Local storage key holding the serialized session record.
pub const SESSION_KEY: &str = "auth";

pub const ADMIN_ROLE: &str = "ADMIN_ROLE";
pub const EMPLOYEE_ROLE: &str = "EMPLOYEE_ROLE";

/// Coarse permission tag attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Employee,
    /// Any other value the auth service returned, including the empty string.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::Employee => EMPLOYEE_ROLE,
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the roles the application knows how to route.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            ADMIN_ROLE => Self::Admin,
            EMPLOYEE_ROLE => Self::Employee,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub role: Role,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(role: impl Into<Role>, token: impl Into<String>) -> Self {
        Self { role: role.into(), token: token.into(), username: None }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Label for greetings; falls back to the role when no username is set.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(self.role.as_str())
    }
}

/// Loose shape used to read whatever is under the key before validating it.
#[derive(Deserialize)]
struct StoredSession {
    role: Option<String>,
    token: Option<String>,
    username: Option<String>,
}

impl StoredSession {
    fn into_record(self) -> Option<SessionRecord> {
        let role = self.role?;
        let token = self.token.filter(|t| !t.is_empty())?;
        Some(SessionRecord { role: Role::from(role), token, username: self.username })
    }
}

/// Read/write access to the persisted session. Operations never fail;
/// storage problems degrade to "absent".
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<SessionRecord>;
    fn save(&self, record: &SessionRecord);
    fn clear(&self);
}

/// Shared handle provided through Leptos context.
pub type SessionHandle = Arc<dyn SessionStore>;

/// Session store over any string key-value backend.
#[derive(Debug, Default)]
pub struct KeyValueSessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn purge(&self, reason: &str) {
        leptos::logging::warn!("discarding stored session: {reason}");
        self.clear();
    }
}

impl<B: StorageBackend> SessionStore for KeyValueSessionStore<B> {
    fn load(&self) -> Option<SessionRecord> {
        let raw = self.backend.get(SESSION_KEY)?;
        let stored = match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                self.purge(&format!("unparseable ({e})"));
                return None;
            }
        };
        let record = stored.into_record();
        if record.is_none() {
            self.purge("missing role or token");
        }
        record
    }

    fn save(&self, record: &SessionRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("session encode failed: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(SESSION_KEY, &raw) {
            leptos::logging::warn!("session save failed: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.backend.remove(SESSION_KEY) {
            leptos::logging::warn!("session clear failed: {e}");
        }
    }
}

/// Session store backed by browser `localStorage`.
#[must_use]
pub fn browser_session_store() -> SessionHandle {
    Arc::new(KeyValueSessionStore::new(LocalStorageBackend))
}
