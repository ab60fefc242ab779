//! API error types with IntoResponse
//!
//! Every failure a handler can produce ends up here. Conversion from
//! [`DbError`] is the single classification step; [`IntoResponse`] is the
//! single status/message table. Bodies are `{"message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Bad input, either caught up front or reported by a constraint (400)
    Validation(ValidationError),

    /// Domain lookup matched nothing (404)
    NotFound { message: String },

    /// No route matched the request (404)
    RouteNotFound,

    /// Unique key already taken (409)
    Conflict,

    /// Unclassified database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

/// Map a Postgres SQLSTATE to a client error, if it is one.
///
/// - 23502 not_null_violation → missing keys
/// - 23503 foreign_key_violation → invalid values
/// - 22P02 invalid_text_representation, 22003 numeric_value_out_of_range →
///   invalid input type
/// - 23505 unique_violation → conflict
pub fn classify_sqlstate(code: &str) -> Option<ApiError> {
    match code {
        "23502" => Some(ApiError::Validation(ValidationError::MissingKeys { field: "body" })),
        "23503" => Some(ApiError::Validation(ValidationError::InvalidValues)),
        "22P02" | "22003" => Some(ApiError::Validation(ValidationError::InvalidInputType {
            field: "body",
        })),
        "23505" => Some(ApiError::Conflict),
        _ => None,
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { message } => message.clone(),
            Self::RouteNotFound => "not found".to_owned(),
            Self::Conflict => "resource already exists".to_owned(),
            Self::Database(_) | Self::Internal { .. } => "internal server error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::Validation(e) => {
                tracing::debug!(detail = e.detail().unwrap_or_default(), "rejected input: {}", e)
            }
            _ => {}
        }

        let body = json!({ "message": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            DbError::Sqlx(sqlx::Error::Database(ref db_err)) => {
                let classified = db_err.code().and_then(|code| classify_sqlstate(&code));
                match classified {
                    Some(err) => err,
                    None => Self::Database(e),
                }
            }
            _ => Self::Database(e),
        }
    }
}
