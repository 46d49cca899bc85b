//! Validation error types

use std::fmt;

/// Validation error for incoming post data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields that were absent or empty
    Missing { fields: Vec<&'static str> },

    /// Field exceeds maximum length (in characters)
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { fields } => write!(
                f,
                "title and content are both required (missing: {})",
                fields.join(", ")
            ),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
