//! Storage infrastructure - backend selection, pooling and migrations

mod backend;
pub mod migrations;
mod postgres;

pub use backend::StorageType;
pub use migrations::{run_migrations, Migration, Migrator, PostgresMigrator};
pub use postgres::PostgresConfig;
