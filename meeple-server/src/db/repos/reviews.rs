//! Review repository
//!
//! Handles review CRUD with:
//! - `comment_count` derived in the same query as the rows
//! - Dynamic list queries composed from a validated `ReviewListQuery`
//! - `total_count` via `COUNT(*) OVER()` so it ignores LIMIT/OFFSET

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::models::{IncVotes, NewReview, ReviewListQuery};
use super::{count_as_string, DbError};

/// Columns returned for a single review, aliased to `r`
const REVIEW_COLUMNS: &str = "r.review_id, r.title, r.designer, r.owner, r.review_img_url, \
     r.review_body, r.category, r.created_at, r.votes";

/// Correlated comment count for the row aliased `r`
const COMMENT_COUNT: &str =
    "(SELECT COUNT(*) FROM comments c WHERE c.review_id = r.review_id) AS comment_count";

/// Review with its comment count
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    #[serde(serialize_with = "count_as_string")]
    pub comment_count: i64,
}

/// Review row in a list response (no body)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewListItem {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    #[serde(serialize_with = "count_as_string")]
    pub comment_count: i64,
    /// Rows matching the filter across all pages
    #[serde(serialize_with = "count_as_string")]
    pub total_count: i64,
}

/// Compose the list query for `GET /api/reviews`.
///
/// Ties on the sort column fall back to `review_id ASC` so pages are stable.
pub fn list_query(query: &ReviewListQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT r.review_id, r.title, r.designer, r.owner, r.review_img_url, r.category, \
         r.created_at, r.votes, COUNT(c.comment_id) AS comment_count, \
         COUNT(*) OVER() AS total_count \
         FROM reviews r LEFT JOIN comments c ON c.review_id = r.review_id",
    );

    if let Some(category) = &query.category {
        builder.push(" WHERE r.category = ").push_bind(category.as_str());
    }

    builder
        .push(" GROUP BY r.review_id ORDER BY ")
        .push(query.sort_by.sql_column())
        .push(" ")
        .push(query.order.as_sql())
        .push(", r.review_id ASC LIMIT ")
        .push_bind(query.pagination.limit);

    if let Some(offset) = query.pagination.offset() {
        builder.push(" OFFSET ").push_bind(offset);
    }

    builder
}

/// Compose the insert for `POST /api/reviews`.
///
/// `review_img_url` is only listed when supplied so the column default
/// applies otherwise.
fn insert_query(review: &NewReview) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "WITH r AS (INSERT INTO reviews (owner, title, review_body, designer, category",
    );
    if review.review_img_url.is_some() {
        builder.push(", review_img_url");
    }

    builder.push(") VALUES (");
    let mut values = builder.separated(", ");
    values
        .push_bind(review.owner.as_str())
        .push_bind(review.title.as_str())
        .push_bind(review.review_body.as_str())
        .push_bind(review.designer.as_str())
        .push_bind(review.category.as_str());
    if let Some(url) = &review.review_img_url {
        values.push_bind(url.as_str());
    }
    values.push_unseparated(") RETURNING *) SELECT ");

    builder
        .push(REVIEW_COLUMNS)
        .push(", ")
        .push(COMMENT_COUNT)
        .push(" FROM r");

    builder
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews per the validated query.
    pub async fn list(&self, query: &ReviewListQuery) -> Result<Vec<ReviewListItem>, DbError> {
        let mut builder = list_query(query);
        let reviews = builder
            .build_query_as::<ReviewListItem>()
            .fetch_all(self.pool)
            .await?;

        Ok(reviews)
    }

    /// Get a single review with its comment count.
    pub async fn get(&self, review_id: i32) -> Result<Review, DbError> {
        let sql = format!("SELECT {REVIEW_COLUMNS}, {COMMENT_COUNT} FROM reviews r WHERE r.review_id = $1");

        sqlx::query_as::<_, Review>(&sql)
            .bind(review_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("review ID", review_id))
    }

    /// Insert a review. `votes` and `created_at` take their column defaults.
    pub async fn create(&self, review: &NewReview) -> Result<Review, DbError> {
        let mut builder = insert_query(review);
        let review = builder
            .build_query_as::<Review>()
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(review_id = review.review_id, "review created");
        Ok(review)
    }

    /// Add `inc_votes` to a review's votes, returning the updated row.
    pub async fn increment_votes(&self, review_id: i32, inc_votes: IncVotes) -> Result<Review, DbError> {
        let sql = format!(
            "WITH r AS (UPDATE reviews SET votes = votes + $1 WHERE review_id = $2 RETURNING *) \
             SELECT {REVIEW_COLUMNS}, {COMMENT_COUNT} FROM r"
        );

        sqlx::query_as::<_, Review>(&sql)
            .bind(inc_votes.get())
            .bind(review_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("review ID", review_id))
    }

    /// Delete a review; its comments go with it.
    pub async fn delete(&self, review_id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("review ID", review_id));
        }

        Ok(())
    }
}
