//! Route handlers organized by resource

pub mod api;
pub mod categories;
pub mod comments;
pub mod health;
pub mod reviews;
pub mod users;

use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// PATCH body shared by reviews and comments.
///
/// `inc_votes` stays untyped until `IncVotes::new` so a wrong type is
/// "invalid input type" rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub inc_votes: Option<Value>,
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
