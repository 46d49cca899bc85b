//! postbox-server: HTTP backend for a minimal blog
//!
//! Lists and creates posts stored in a single PostgreSQL table.
//! Handlers receive storage through [`AppState`], so the PostgreSQL
//! repository can be swapped for [`db::MemoryPostStore`] in tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, PostStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
