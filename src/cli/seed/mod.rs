//! Seed command - creates or resets the demo accounts

use clap::Args;
use tracing::info;

use crate::infrastructure::storage::{run_migrations, StorageType};
use crate::infrastructure::user::{seed_demo_users, Argon2Hasher, PostgresUserRepository};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Password for every demo account (defaults to `seed.password`)
    #[arg(long)]
    pub password: Option<String>,
}

pub async fn run(args: SeedArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let backend: StorageType = config
        .storage
        .backend
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    if backend != StorageType::Postgres {
        anyhow::bail!(
            "seed writes to PostgreSQL; for in-memory storage set seed.enabled and run serve"
        );
    }

    let password = args.password.unwrap_or_else(|| config.seed.password.clone());
    let hasher = Argon2Hasher::from_config(&config.password)?;

    let pool = crate::connect_database(&config).await?;
    run_migrations(&pool).await?;

    let repository = PostgresUserRepository::new(pool);
    let report = seed_demo_users(&repository, &hasher, &password).await?;

    info!(
        created = report.created,
        updated = report.updated,
        "Demo accounts ready"
    );

    Ok(())
}
