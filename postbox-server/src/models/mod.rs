//! Domain models with validation at construction
//!
//! Request bodies arrive as [`CreatePostRequest`] and are turned into a
//! [`NewPost`] before anything touches storage.

pub mod post;
pub mod validation;

pub use post::{CreatePostRequest, NewPost, Post, PostSummary, MAX_TITLE_LEN};
pub use validation::ValidationError;
