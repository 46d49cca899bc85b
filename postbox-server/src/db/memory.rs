//! In-memory post store
//!
//! Same contract as the PostgreSQL repository: ids start at 1 and only
//! grow, listings are newest first. Used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{DbError, PostStore};
use crate::models::{NewPost, Post, PostSummary};

#[derive(Default)]
struct Inner {
    last_id: i32,
    posts: Vec<Post>,
}

/// Mutex-guarded in-memory post store
#[derive(Default)]
pub struct MemoryPostStore {
    inner: Mutex<Inner>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub fn count(&self) -> Result<usize, DbError> {
        Ok(self.inner.lock().map_err(poisoned)?.posts.len())
    }
}

fn poisoned<T>(_: T) -> DbError {
    DbError::Unavailable("post store lock poisoned".into())
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, DbError> {
        let mut posts = self.inner.lock().map_err(poisoned)?.posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts.into_iter().map(PostSummary::from).collect())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DbError> {
        let (title, content) = post.into_parts();
        let mut inner = self.inner.lock().map_err(poisoned)?;

        inner.last_id += 1;
        let created = Post {
            id: inner.last_id,
            title,
            content,
            created_at: Utc::now(),
        };
        inner.posts.push(created.clone());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(Some(title.into()), Some("body".into())).unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryPostStore::new();
        assert!(store.list_posts().await.unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_increase_from_one() {
        let store = MemoryPostStore::new();
        let a = store.create_post(new_post("a")).await.unwrap();
        let b = store.create_post(new_post("b")).await.unwrap();
        let c = store.create_post(new_post("c")).await.unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(store.count().unwrap(), 3);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let store = MemoryPostStore::new();
        for title in ["A", "B", "C"] {
            store.create_post(new_post(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn poisoned_lock_is_an_error() {
        let store = MemoryPostStore::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.lock().unwrap();
            panic!("writer died holding the lock");
        }));

        assert!(matches!(store.count(), Err(DbError::Unavailable(_))));
        assert!(matches!(store.list_posts().await, Err(DbError::Unavailable(_))));
        assert!(store.create_post(new_post("late")).await.is_err());
    }
}
