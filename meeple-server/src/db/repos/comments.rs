//! Comment repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::models::{IncVotes, NewComment, Pagination};
use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub author: String,
    pub review_id: i32,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Newest first; `comment_id` breaks ties.
pub fn list_query(review_id: i32, page: Pagination) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT comment_id, body, author, review_id, created_at, votes \
         FROM comments WHERE review_id = ",
    );

    builder
        .push_bind(review_id)
        .push(" ORDER BY created_at DESC, comment_id ASC LIMIT ")
        .push_bind(page.limit);

    if let Some(offset) = page.offset() {
        builder.push(" OFFSET ").push_bind(offset);
    }

    builder
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List comments for a review.
    ///
    /// An unknown review yields an empty list; callers pair this with an
    /// existence check.
    pub async fn list_for_review(&self, review_id: i32, page: Pagination) -> Result<Vec<Comment>, DbError> {
        let mut builder = list_query(review_id, page);
        let comments = builder
            .build_query_as::<Comment>()
            .fetch_all(self.pool)
            .await?;

        Ok(comments)
    }

    /// Insert a comment. An unknown author is a foreign-key violation.
    pub async fn create(&self, comment: &NewComment) -> Result<Comment, DbError> {
        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (review_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, body, author, review_id, created_at, votes
            "#,
        )
        .bind(comment.review_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(comment_id = comment.comment_id, "comment created");
        Ok(comment)
    }

    /// Add `inc_votes` to a comment's votes, returning the updated row.
    pub async fn increment_votes(&self, comment_id: i32, inc_votes: IncVotes) -> Result<Comment, DbError> {
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments SET votes = votes + $1
            WHERE comment_id = $2
            RETURNING comment_id, body, author, review_id, created_at, votes
            "#,
        )
        .bind(inc_votes.get())
        .bind(comment_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("comment ID", comment_id))
    }

    pub async fn delete(&self, comment_id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("comment ID", comment_id));
        }

        Ok(())
    }
}
