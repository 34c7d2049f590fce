//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Row store for forum users
///
/// The `update_*` and `delete_by_id` operations report the number of rows
/// they affected so callers can detect lost updates.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by their ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if a username is taken by any user
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check if an email is taken by any user
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a new user, assigning its ID and creation time
    async fn save(&self, user: NewUser) -> Result<User, DomainError>;

    async fn update_username(&self, id: UserId, username: &str) -> Result<u64, DomainError>;

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<u64, DomainError>;

    async fn update_email(&self, id: UserId, email: &str) -> Result<u64, DomainError>;

    async fn delete_by_id(&self, id: UserId) -> Result<u64, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<u64, DomainError>;
}
