//! User endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPath;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct UserBody {
    pub user: User,
}

/// GET /api/users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersBody>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(UsersBody { users }))
}

/// GET /api/users/{username}
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidPath(username): ValidPath<String>,
) -> Result<Json<UserBody>, ApiError> {
    let user = UserRepo::new(&state.pool).get(&username).await?;
    Ok(Json(UserBody { user }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{username}", get(get_user))
}
