//! Database migrations infrastructure

use async_trait::async_trait;
use sqlx::{postgres::PgPool, Executor};
use tracing::info;

use crate::domain::DomainError;

/// Trait for running database migrations
#[async_trait]
pub trait Migrator: Send + Sync {
    /// Runs all pending migrations, returning how many were applied
    async fn run(&self) -> Result<usize, DomainError>;

    /// Reverts the last applied migration, returning its version
    async fn revert(&self) -> Result<Option<i64>, DomainError>;

    /// Returns the current migration version
    async fn version(&self) -> Result<Option<i64>, DomainError>;
}

/// PostgreSQL migrator recording applied versions in `_migrations`
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
    migrations: Vec<Migration>,
}

impl PostgresMigrator {
    /// Create a migrator for the account schema
    pub fn new(pool: PgPool) -> Self {
        Self::with_migrations(pool, account_migrations())
    }

    pub fn with_migrations(pool: PgPool, migrations: Vec<Migration>) -> Self {
        Self { pool, migrations }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    async fn is_applied(&self, version: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
            .bind(version)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))
    }

    /// Applies `migration` and records it in one transaction; false if already applied
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        if self.is_applied(migration.version).await? {
            return Ok(false);
        }

        let step = format!("apply migration {}", migration.version);
        let mut tx = self.pool.begin().await.map_err(|e| step_error(&step, e))?;

        // Unprepared, so one migration may hold several statements
        (&mut *tx)
            .execute(migration.up.as_str())
            .await
            .map_err(|e| step_error(&step, e))?;
        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| step_error(&step, e))?;

        tx.commit().await.map_err(|e| step_error(&step, e))?;
        info!(version = migration.version, description = %migration.description, "Applied migration");

        Ok(true)
    }

    /// Undoes `migration` and drops its record in one transaction; false if not applied
    pub async fn revert_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        if !self.is_applied(migration.version).await? {
            return Ok(false);
        }

        let step = format!("revert migration {}", migration.version);
        let mut tx = self.pool.begin().await.map_err(|e| step_error(&step, e))?;

        (&mut *tx)
            .execute(migration.down.as_str())
            .await
            .map_err(|e| step_error(&step, e))?;
        sqlx::query("DELETE FROM _migrations WHERE version = $1")
            .bind(migration.version)
            .execute(&mut *tx)
            .await
            .map_err(|e| step_error(&step, e))?;

        tx.commit().await.map_err(|e| step_error(&step, e))?;
        info!(version = migration.version, "Reverted migration");

        Ok(true)
    }
}

fn step_error(step: &str, err: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to {}: {}", step, err))
}

#[async_trait]
impl Migrator for PostgresMigrator {
    async fn run(&self) -> Result<usize, DomainError> {
        let mut applied = 0;

        for migration in &self.migrations {
            if self.run_migration(migration).await? {
                applied += 1;
            }
        }

        Ok(applied)
    }

    async fn revert(&self) -> Result<Option<i64>, DomainError> {
        let Some(current) = self.version().await? else {
            return Ok(None);
        };

        let migration = self
            .migrations
            .iter()
            .find(|m| m.version == current)
            .ok_or_else(|| {
                DomainError::storage(format!("No migration definition for version {}", current))
            })?;

        self.revert_migration(migration).await?;

        Ok(Some(current))
    }

    async fn version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations WHERE success = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version, ascending
    pub version: i64,
    /// Human-readable description
    pub description: String,
    /// SQL to run when applying the migration
    pub up: String,
    /// SQL to run when reverting the migration
    pub down: String,
}

impl Migration {
    pub fn new(
        version: i64,
        description: impl Into<String>,
        up: impl Into<String>,
        down: impl Into<String>,
    ) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Migrations for the account schema
///
/// Constraint names are matched by the repository to report which column
/// collided on a unique violation.
pub fn account_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "Create forum_users table",
            r#"
            CREATE TABLE IF NOT EXISTS forum_users (
                user_id BIGSERIAL PRIMARY KEY,
                username VARCHAR(255) NOT NULL,
                password_hash TEXT NOT NULL,
                email VARCHAR(255) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT forum_users_username_key UNIQUE (username),
                CONSTRAINT forum_users_email_key UNIQUE (email)
            );
            "#,
            r#"
            DROP TABLE IF EXISTS forum_users;
            "#,
        ),
        Migration::new(
            2,
            "Index forum_users by creation time",
            r#"
            CREATE INDEX IF NOT EXISTS idx_forum_users_created_at ON forum_users(created_at);
            "#,
            r#"
            DROP INDEX IF EXISTS idx_forum_users_created_at;
            "#,
        ),
    ]
}

/// Runs all pending account migrations
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DomainError> {
    PostgresMigrator::new(pool.clone()).run().await
}
