//! Database integration for seeding.
//!
//! The [`Seeder`] provides one bulk-insert method per table, returning the
//! assigned primary keys so later steps can reference them as foreign keys.

mod seeder;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;

pub use seeder::{SeedError, Seeder};

/// Opens the connection pool described by the configuration.
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options()?)
        .await
}
