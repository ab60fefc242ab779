//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::NewCategory;

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CategoriesBody {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct CategoryBody {
    pub category: Category,
}

/// GET /api/categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesBody>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(CategoriesBody { categories }))
}

/// POST /api/categories
async fn create_category(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryBody>), ApiError> {
    let new_category = NewCategory::new(req.slug, req.description)?;
    let category = CategoryRepo::new(&state.pool).create(&new_category).await?;

    Ok((StatusCode::CREATED, Json(CategoryBody { category })))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/categories", get(list_categories).post(create_category))
}
