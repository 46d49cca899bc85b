//! Post records and the create-post request contract

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for post titles, matching the `VARCHAR(255)` column
pub const MAX_TITLE_LEN: usize = 255;

/// Full post row, returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Post as shown in listings (no timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl From<Post> for PostSummary {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
        }
    }
}

/// Body of `POST /api/posts`.
///
/// Both fields are optional at the type level so that an absent field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Validated input for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
}

impl NewPost {
    /// Validate title and content.
    ///
    /// # Rules
    /// - Both present; the empty string counts as absent
    /// - Whitespace is kept as-is (a title of `" "` is accepted)
    /// - Title at most 255 characters, content unbounded
    ///
    /// # Example
    /// ```
    /// use postbox_server::models::NewPost;
    ///
    /// assert!(NewPost::new(Some("Hello".into()), Some("World".into())).is_ok());
    /// assert!(NewPost::new(Some("".into()), Some("World".into())).is_err());
    /// assert!(NewPost::new(None, Some("World".into())).is_err());
    /// ```
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, ValidationError> {
        let title = title.filter(|s| !s.is_empty());
        let content = content.filter(|s| !s.is_empty());

        let (title, content) = match (title, content) {
            (Some(title), Some(content)) => (title, content),
            (title, content) => {
                let mut fields = Vec::with_capacity(2);
                if title.is_none() {
                    fields.push("title");
                }
                if content.is_none() {
                    fields.push("content");
                }
                return Err(ValidationError::Missing { fields });
            }
        };

        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self { title, content })
    }

    /// Consume and return `(title, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

impl TryFrom<CreatePostRequest> for NewPost {
    type Error = ValidationError;

    fn try_from(req: CreatePostRequest) -> Result<Self, Self::Error> {
        Self::new(req.title, req.content)
    }
}
