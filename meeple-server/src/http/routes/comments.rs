//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{check_exists, Comment, CommentRepo, Reference};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{required, IncVotes, NewComment, Pagination, PaginationParams};

use super::VoteRequest;

/// Create comment request
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<Comment>,
}

#[derive(Serialize)]
pub struct CommentBody {
    pub comment: Comment,
}

/// GET /api/reviews/{review_id}/comments - list comments for a review
///
/// The review existence check runs alongside the list query; a review with
/// no comments is `[]`, an unknown review is a 404.
async fn list_comments(
    State(state): State<Arc<AppState>>,
    ValidId(review_id): ValidId,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<CommentsBody>, ApiError> {
    let page = Pagination::try_from(params)?;
    let repo = CommentRepo::new(&state.pool);

    let (comments, ()) = tokio::try_join!(
        repo.list_for_review(review_id, page),
        check_exists(&state.pool, Reference::ReviewId(review_id)),
    )?;

    Ok(Json(CommentsBody { comments }))
}

/// POST /api/reviews/{review_id}/comments - add a comment
///
/// The review is checked before inserting so a missing review is always a
/// 404, never a foreign-key error.
async fn create_comment(
    State(state): State<Arc<AppState>>,
    ValidId(review_id): ValidId,
    ValidJson(req): ValidJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentBody>), ApiError> {
    let new_comment = NewComment {
        review_id,
        author: required("username", req.username)?,
        body: required("body", req.body)?,
    };

    check_exists(&state.pool, Reference::ReviewId(review_id)).await?;
    let comment = CommentRepo::new(&state.pool).create(&new_comment).await?;

    Ok((StatusCode::CREATED, Json(CommentBody { comment })))
}

/// PATCH /api/comments/{comment_id} - add to a comment's votes
async fn patch_comment(
    State(state): State<Arc<AppState>>,
    ValidId(comment_id): ValidId,
    ValidJson(req): ValidJson<VoteRequest>,
) -> Result<(StatusCode, Json<CommentBody>), ApiError> {
    let inc_votes = IncVotes::new(req.inc_votes)?;
    let comment = CommentRepo::new(&state.pool)
        .increment_votes(comment_id, inc_votes)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentBody { comment })))
}

/// DELETE /api/comments/{comment_id}
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    ValidId(comment_id): ValidId,
) -> Result<StatusCode, ApiError> {
    CommentRepo::new(&state.pool).delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/reviews/{review_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(patch_comment).delete(delete_comment),
        )
}
