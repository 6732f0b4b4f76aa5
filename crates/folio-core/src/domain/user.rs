//! API user, group and role entities.

use crate::{GroupId, RoleId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The administrator role name checked by protected endpoints.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A consumer of the API, authenticated with an opaque API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    /// Unique identifier.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// Contact email address.
    pub email: String,

    /// Disabled users fail authentication even with a valid key.
    pub enabled: bool,

    /// Opaque key presented in the `X-Api-Key` header.
    pub api_key: Option<String>,

    /// Granted role names (`ROLE_ADMIN`, ...).
    pub roles: Vec<String>,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ApiUser {
    /// Creates an enabled user without a key; call
    /// [`ensure_api_key`](Self::ensure_api_key) before handing it out.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(0),
            username: username.into(),
            email: email.into(),
            enabled: true,
            api_key: None,
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Generates a fresh opaque API key.
    #[must_use]
    pub fn generate_api_key() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Assigns a generated key when the user has none yet.
    pub fn ensure_api_key(&mut self) {
        if self.api_key.is_none() {
            self.api_key = Some(Self::generate_api_key());
            self.updated_at = Utc::now();
        }
    }

    /// Checks whether the user carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Checks whether the user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Enables or disables the account.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.updated_at = Utc::now();
    }
}

/// A group bundling role grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub roles: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            id: GroupId::new(0),
            name: name.into(),
            roles,
        }
    }
}

/// A grantable role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub role: String,
}

impl Role {
    /// Creates a role, normalizing the name to the `ROLE_` convention.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        let mut role = role.into().to_uppercase();
        if !role.starts_with("ROLE_") {
            role = format!("ROLE_{role}");
        }
        Self {
            id: RoleId::new(0),
            role,
        }
    }
}
