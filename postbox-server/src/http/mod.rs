//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default (browser front ends on any origin)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{build_router, run_server, serve_on, ServerConfig, ServerError};
pub use state::AppState;
