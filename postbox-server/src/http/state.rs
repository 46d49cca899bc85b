//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{PostRepo, PostStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// State backed by the PostgreSQL repository.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PostRepo::new(pool)))
    }

    pub fn store(&self) -> &dyn PostStore {
        self.store.as_ref()
    }
}
