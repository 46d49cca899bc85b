//! Subcommand implementations

pub mod database;
pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;
