//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

const USERNAME_CONSTRAINT: &str = "forum_users_username_key";
const EMAIL_CONSTRAINT: &str = "forum_users_email_key";

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, username, password_hash, email, created_at
            FROM forum_users
            WHERE user_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, username, password_hash, email, created_at
            FROM forum_users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM forum_users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check username: {}", e)))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM forum_users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check email: {}", e)))
    }

    async fn save(&self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO forum_users (username, password_hash, email)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, password_hash, email, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to create user"))?;

        row_to_user(&row)
    }

    async fn update_username(&self, id: UserId, username: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE forum_users SET username = $2 WHERE user_id = $1")
            .bind(id.value())
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to update username"))?;

        Ok(result.rows_affected())
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE forum_users SET password_hash = $2 WHERE user_id = $1")
            .bind(id.value())
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update password: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn update_email(&self, id: UserId, email: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE forum_users SET email = $2 WHERE user_id = $1")
            .bind(id.value())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to update email"))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM forum_users WHERE user_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forum_users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count.max(0) as u64)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Failed to decode user row: {}", e));

    let id: i64 = row.try_get("user_id").map_err(decode)?;
    let username: String = row.try_get("username").map_err(decode)?;
    let password_hash: String = row.try_get("password_hash").map_err(decode)?;
    let email: String = row.try_get("email").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;

    Ok(User::from_parts(
        UserId::new(id),
        username,
        password_hash,
        email,
        created_at,
    ))
}

/// Map a write failure, turning unique-constraint violations into conflicts
fn write_error(err: sqlx::Error, context: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(conflict) = unique_violation(db_err.constraint()) {
                return conflict;
            }
        }
    }

    DomainError::storage(format!("{}: {}", context, err))
}

fn unique_violation(constraint: Option<&str>) -> Option<DomainError> {
    match constraint? {
        USERNAME_CONSTRAINT => Some(DomainError::conflict("Username already exists")),
        EMAIL_CONSTRAINT => Some(DomainError::conflict("Email already exists")),
        _ => None,
    }
}
