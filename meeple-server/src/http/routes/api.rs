//! Endpoint catalog: `GET /api`

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Machine-readable description of every endpoint, keyed by "METHOD /path"
const ENDPOINTS: &str = include_str!("../endpoints.json");

#[derive(Serialize)]
pub struct EndpointsBody {
    pub endpoints: Value,
}

fn endpoint_catalog() -> Result<Value, ApiError> {
    serde_json::from_str(ENDPOINTS).map_err(|e| ApiError::Internal {
        message: format!("endpoint catalog is not valid JSON: {e}"),
    })
}

/// GET /api
async fn get_endpoints() -> Result<Json<EndpointsBody>, ApiError> {
    Ok(Json(EndpointsBody {
        endpoints: endpoint_catalog()?,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api", get(get_endpoints))
}
