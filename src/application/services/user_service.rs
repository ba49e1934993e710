//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for listing and creating users.
///
/// No uniqueness check is made on name or email, and passwords are stored
/// as given.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Stores a new user and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;

        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn user_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
