//! Database layer - connection pool, schema and post storage
//!
//! - Pool connects lazily so the server can start while PostgreSQL is down
//! - Schema setup is a single idempotent `CREATE TABLE IF NOT EXISTS`
//! - Handlers talk to [`PostStore`], never to the pool directly

pub mod config;
pub mod error;
pub mod memory;
pub mod pool;
pub mod repo;
pub mod schema;

pub use config::DatabaseConfig;
pub use error::DbError;
pub use memory::MemoryPostStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repo::{PostRepo, PostStore};
pub use schema::ensure_schema;
