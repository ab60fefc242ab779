//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Derived counts come from the same query as the rows (no N+1)
//! - Foreign keys are enforced by the database; constraint violations
//!   surface as `DbError::Sqlx` and are classified at the HTTP boundary
//! - Zero-row updates and deletes become `DbError::NotFound`

pub mod categories;
pub mod comments;
pub mod exists;
pub mod reviews;
pub mod users;

use serde::Serializer;

pub use categories::{Category, CategoryRepo};
pub use comments::{Comment, CommentRepo};
pub use exists::{check_exists, Reference};
pub use reviews::{Review, ReviewListItem, ReviewRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// `resource` is the client-facing subject, e.g. "review ID"
    #[error("{resource} not found")]
    NotFound { resource: &'static str, key: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, key: impl ToString) -> Self {
        let key = key.to_string();
        tracing::debug!(resource, key = %key, "lookup matched no rows");
        Self::NotFound { resource, key }
    }
}

/// BIGINT counts go over the wire as decimal strings.
pub(crate) fn count_as_string<S: Serializer>(count: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(count)
}
