//! Custom Axum extractors
//!
//! All reject with [`ApiError`] so malformed input gets the same JSON body
//! as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{parse_id, ValidationError};
use super::error::ApiError;

/// Extract and validate a numeric id from a single-parameter path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidInputType { field: "id" }))?;

        Ok(Self(parse_id("id", &raw)?))
    }
}

/// JSON body whose syntax or type errors become "invalid input type"
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::Validation(ValidationError::InvalidInputType { field: "body" })
        })?;

        Ok(Self(value))
    }
}

/// Path parameters whose decoding errors become "invalid input type"
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected path");
            ApiError::Validation(ValidationError::InvalidInputType { field: "path" })
        })?;

        Ok(Self(value))
    }
}

/// Query string whose deserialization errors (duplicate keys, bad
/// encoding) become "invalid input type"
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected query string");
            ApiError::Validation(ValidationError::InvalidInputType { field: "query" })
        })?;

        Ok(Self(value))
    }
}
