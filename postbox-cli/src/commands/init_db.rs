//! One-shot schema setup

use anyhow::{Context, Result};
use clap::Parser;

use postbox_server::db::{create_pool, ensure_schema, DatabaseConfig};

use super::database::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the posts table and exit. Unlike `serve`, failure is an error.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db_config = DatabaseConfig::from(args.database);
    let pool = create_pool(&db_config).context("Failed to configure database pool")?;

    ensure_schema(&pool)
        .await
        .with_context(|| format!("Failed to create posts table on {}", db_config.target()))?;

    pool.close().await;
    Ok(())
}
