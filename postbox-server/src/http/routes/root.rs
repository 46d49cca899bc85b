//! Root liveness route

use axum::{routing::get, Router};

/// Plain-text body of `GET /`
pub const GREETING: &str = "Hello, Blog Backend!";

/// GET /
async fn root() -> &'static str {
    GREETING
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
