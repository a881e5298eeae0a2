use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{AuthRecord, NewUser, SessionIdentity, User};

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Loads all users ordered by username. Hashes are not included.
    fn list(&self) -> Result<Vec<User>>;
    /// Looks a user up for a credential check; `None` when the username
    /// does not exist.
    fn find_by_username(&self, username: &str) -> Result<Option<AuthRecord>>;
    /// Inserts a user with an already-hashed password. The unique username
    /// constraint surfaces as a `UniqueViolation`.
    async fn insert(&self, username: String, password_hash: String, role: String) -> Result<User>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Validates credentials against the stored hash. Fails with
    /// "user not found" for unknown usernames and "incorrect password"
    /// for hash mismatches.
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionIdentity>;
    fn get_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
}
