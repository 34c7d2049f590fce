//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    next_id: i64,
}

impl Table {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|u| u.username() == username && Some(u.id()) != except)
    }

    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|u| u.email() == email && Some(u.id()) != except)
    }
}

/// In-memory implementation of UserRepository
///
/// Ids are assigned sequentially starting at 1. Unique usernames and emails
/// are enforced on write, mirroring the table constraints.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.username_taken(username, None))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.email_taken(email, None))
    }

    async fn save(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.username_taken(&user.username, None) {
            return Err(DomainError::conflict("Username already exists"));
        }

        if table.email_taken(&user.email, None) {
            return Err(DomainError::conflict("Email already exists"));
        }

        table.next_id += 1;
        let id = UserId::new(table.next_id);

        let stored = User::from_parts(id, user.username, user.password_hash, user.email, Utc::now());
        table.rows.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update_username(&self, id: UserId, username: &str) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Ok(0);
        }

        if table.username_taken(username, Some(id)) {
            return Err(DomainError::conflict("Username already exists"));
        }

        if let Some(user) = table.rows.get_mut(&id) {
            user.set_username(username);
        }

        Ok(1)
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&id) {
            Some(user) => {
                user.set_password_hash(password_hash);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_email(&self, id: UserId, email: &str) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Ok(0);
        }

        if table.email_taken(email, Some(id)) {
            return Err(DomainError::conflict("Email already exists"));
        }

        if let Some(user) = table.rows.get_mut(&id) {
            user.set_email(email);
        }

        Ok(1)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }
}
