//! Forum Accounts API
//!
//! User account management for a forum application:
//! - Registration with unique usernames and emails
//! - Argon2id password hashing and re-verification on sensitive changes
//! - Username, password and email changes, and account deletion
//! - PostgreSQL or in-memory storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::user::UserRepository;
use infrastructure::{
    storage::{run_migrations, PostgresConfig, StorageType},
    user::{
        seed_demo_users, AccountService, Argon2Hasher, InMemoryUserRepository,
        PostgresUserRepository,
    },
};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend: StorageType = config
        .storage
        .backend
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    info!("Storage backend: {}", storage_backend);

    let hasher = Arc::new(Argon2Hasher::from_config(&config.password)?);

    match storage_backend {
        StorageType::Postgres => {
            let pool = connect_database(config).await?;

            if config.database.run_migrations {
                let applied = run_migrations(&pool).await?;
                info!(applied, "Database migrations complete");
            }

            let repository = Arc::new(PostgresUserRepository::new(pool));
            build_state(repository, hasher, config).await
        }
        StorageType::InMemory => {
            info!("Using in-memory user storage; accounts are lost on restart");
            let repository = Arc::new(InMemoryUserRepository::new());
            build_state(repository, hasher, config).await
        }
    }
}

/// Open the PostgreSQL pool described by `database`
pub async fn connect_database(config: &AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool = PostgresConfig::from(&config.database).connect().await?;
    Ok(pool)
}

async fn build_state<R>(
    repository: Arc<R>,
    hasher: Arc<Argon2Hasher>,
    config: &AppConfig,
) -> anyhow::Result<AppState>
where
    R: UserRepository + 'static,
{
    if config.seed.enabled {
        let report = seed_demo_users(repository.as_ref(), hasher.as_ref(), &config.seed.password).await?;
        info!(created = report.created, updated = report.updated, "Seeded demo users");
    }

    let account_service = Arc::new(AccountService::new(repository, hasher));

    Ok(AppState::new(account_service, config.cors.clone()))
}
