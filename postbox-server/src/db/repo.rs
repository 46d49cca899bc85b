//! Post repository
//!
//! [`PostStore`] is the seam between handlers and storage. [`PostRepo`]
//! is the PostgreSQL implementation; each call checks a connection out of
//! the pool and sqlx returns it when the query finishes, error or not.

use async_trait::async_trait;
use sqlx::PgPool;

use super::DbError;
use crate::models::{NewPost, Post, PostSummary};

/// Storage for posts (testable)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<PostSummary>, DbError>;

    /// Insert a post and return the stored row with its generated id and timestamp.
    async fn create_post(&self, post: NewPost) -> Result<Post, DbError>;
}

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PostRepo {
    pool: PgPool,
}

impl PostRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepo {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, DbError> {
        // id breaks ties between rows inserted within the same clock tick
        let posts = sqlx::query_as::<_, PostSummary>(
            r#"
            SELECT id, title, content
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DbError> {
        let (title, content) = post.into_parts();

        let created = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
