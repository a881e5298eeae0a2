//! User domain models and the legacy password hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{AUTH_SALT, ROLES};
use crate::errors::{Result, ValidationError};

/// Domain model representing a user account. The stored hash never leaves
/// the repository layer in this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: String,
}

/// A user row as loaded for credential checks, hash included.
#[derive(Debug, Clone)]
pub struct AuthRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// The authenticated identity carried through a session. Handlers receive
/// this explicitly; there is no ambient login state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl SessionIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == "Admin"
    }
}

/// Input model for creating a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl NewUser {
    pub fn validate(&mut self) -> Result<()> {
        self.username = self.username.trim().to_string();
        if self.username.is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        if !ROLES.contains(&self.role.as_str()) {
            return Err(
                ValidationError::InvalidInput(format!("unknown role '{}'", self.role)).into(),
            );
        }
        Ok(())
    }
}

/// Hashes a password with the fixed global salt prepended.
///
/// Every user shares the one salt; see DESIGN.md for why this known-weak
/// scheme is kept.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(AUTH_SALT.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
