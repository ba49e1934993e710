//! Repository trait for users.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing users.
///
/// Identifiers are assigned by the repository on [`UserRepository::create`]
/// and must be unique and increasing within one repository, even under
/// concurrent calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - lock-guarded `Vec`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Stores a new user and returns it with its assigned identifier.
    ///
    /// No uniqueness check is made on name or email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store fails.
    async fn count(&self) -> Result<usize, AppError>;
}
