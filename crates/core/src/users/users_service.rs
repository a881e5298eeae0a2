use log::{debug, warn};
use std::sync::Arc;

use super::users_model::{hash_password, NewUser, SessionIdentity, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{AuthError, Result};

/// Service for user management and credential checks.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionIdentity> {
        let record = self
            .repository
            .find_by_username(username)?
            .ok_or(AuthError::UserNotFound)?;

        if hash_password(password) != record.password_hash {
            warn!("Failed login attempt for '{}'", username);
            return Err(AuthError::IncorrectPassword.into());
        }

        debug!("Authenticated '{}' ({})", record.username, record.role);
        Ok(SessionIdentity {
            user_id: record.id,
            username: record.username,
            role: record.role,
        })
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    async fn create_user(&self, mut new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let password_hash = hash_password(&new_user.password);
        self.repository
            .insert(new_user.username, password_hash, new_user.role)
            .await
    }
}
