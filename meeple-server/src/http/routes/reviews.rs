//! Review endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{check_exists, Reference, Review, ReviewListItem, ReviewRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{required, IncVotes, NewReview, ReviewListParams, ReviewListQuery, ValidationError};

use super::VoteRequest;

/// Create review request
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub owner: Option<String>,
    pub title: Option<String>,
    pub review_body: Option<String>,
    pub designer: Option<String>,
    pub category: Option<String>,
    pub review_img_url: Option<String>,
}

impl TryFrom<CreateReviewRequest> for NewReview {
    type Error = ValidationError;

    fn try_from(req: CreateReviewRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            owner: required("owner", req.owner)?,
            title: required("title", req.title)?,
            review_body: required("review_body", req.review_body)?,
            designer: required("designer", req.designer)?,
            category: required("category", req.category)?,
            review_img_url: req.review_img_url,
        })
    }
}

#[derive(Serialize)]
pub struct ReviewsBody {
    pub reviews: Vec<ReviewListItem>,
}

#[derive(Serialize)]
pub struct ReviewBody {
    pub review: Review,
}

/// GET /api/reviews - list reviews
///
/// A category filter is checked for existence alongside the list query, so
/// an unknown slug is a 404 while a known slug with no reviews is `[]`.
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ReviewListParams>,
) -> Result<Json<ReviewsBody>, ApiError> {
    let query = ReviewListQuery::try_from(params)?;
    let repo = ReviewRepo::new(&state.pool);

    let category_exists = async {
        match &query.category {
            Some(slug) => check_exists(&state.pool, Reference::CategorySlug(slug)).await,
            None => Ok(()),
        }
    };

    let (reviews, ()) = tokio::try_join!(repo.list(&query), category_exists)?;

    Ok(Json(ReviewsBody { reviews }))
}

/// POST /api/reviews - create a review
async fn create_review(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewBody>), ApiError> {
    let new_review = NewReview::try_from(req)?;
    let review = ReviewRepo::new(&state.pool).create(&new_review).await?;

    Ok((StatusCode::CREATED, Json(ReviewBody { review })))
}

/// GET /api/reviews/{review_id} - get a single review
async fn get_review(
    State(state): State<Arc<AppState>>,
    ValidId(review_id): ValidId,
) -> Result<Json<ReviewBody>, ApiError> {
    let review = ReviewRepo::new(&state.pool).get(review_id).await?;
    Ok(Json(ReviewBody { review }))
}

/// PATCH /api/reviews/{review_id} - add to a review's votes
async fn patch_review(
    State(state): State<Arc<AppState>>,
    ValidId(review_id): ValidId,
    ValidJson(req): ValidJson<VoteRequest>,
) -> Result<(StatusCode, Json<ReviewBody>), ApiError> {
    let inc_votes = IncVotes::new(req.inc_votes)?;
    let review = ReviewRepo::new(&state.pool)
        .increment_votes(review_id, inc_votes)
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewBody { review })))
}

/// DELETE /api/reviews/{review_id}
async fn delete_review(
    State(state): State<Arc<AppState>>,
    ValidId(review_id): ValidId,
) -> Result<StatusCode, ApiError> {
    ReviewRepo::new(&state.pool).delete(review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reviews", get(list_reviews).post(create_review))
        .route(
            "/api/reviews/{review_id}",
            get(get_review).patch(patch_review).delete(delete_review),
        )
}
