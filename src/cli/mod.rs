//! CLI module for Forum Accounts
//!
//! Provides subcommands for running and maintaining the service:
//! - `serve`: HTTP API server (default)
//! - `migrate`: apply or revert database migrations
//! - `seed`: create or reset the demo accounts

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Forum Accounts - user registration and account management API
#[derive(Parser)]
#[command(name = "forum-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default mode)
    Serve,

    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),

    /// Create or reset the demo accounts
    Seed(seed::SeedArgs),
}

/// Load `.env`, layered configuration and install logging
///
/// Falls back to defaults when the configuration cannot be read.
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init_logging(&config.logging);

    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}
