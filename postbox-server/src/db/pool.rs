//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are opened
//! on first use, so building the pool succeeds even when the database is
//! unreachable; queries fail until it comes back.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{DatabaseConfig, DbError};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a lazily-connecting PostgreSQL pool.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error only if the configured URL is malformed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default())?;
/// ```
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let options = config.connect_options()?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}
