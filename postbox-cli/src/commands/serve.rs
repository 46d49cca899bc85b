//! HTTP server command
//!
//! Runs the postbox HTTP API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use postbox_server::db::{create_pool, DatabaseConfig};
use postbox_server::http::{run_server, ServerConfig};

use super::database::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POSTBOX_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Only allow localhost origins instead of any origin
    #[arg(long)]
    pub cors_strict: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from(args.database);
    tracing::info!(database = %db_config.target(), "Using database");

    // Lazy pool: an unreachable database does not stop startup
    let pool = create_pool(&db_config).context("Failed to configure database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: !args.cors_strict,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
