//! Post endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::state::AppState;
use crate::models::{CreatePostRequest, NewPost, Post, PostSummary};

const LIST_FAILED: &str = "failed to load posts";
const CREATE_FAILED: &str = "failed to save post";

/// GET /api/posts - all posts, newest first
async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let posts = state
        .store()
        .list_posts()
        .await
        .map_err(ApiError::storage(LIST_FAILED))?;

    Ok(Json(posts))
}

/// POST /api/posts - create a post
async fn create_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let new_post = NewPost::try_from(req)?;
    let post = state
        .store()
        .create_post(new_post)
        .await
        .map_err(ApiError::storage(CREATE_FAILED))?;

    tracing::debug!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/posts", get(list_posts).post(create_post))
}
