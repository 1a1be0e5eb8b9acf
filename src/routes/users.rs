// SPDX-License-Identifier: MIT

//! User routes.

use crate::error::Result;
use crate::models::{User, UserPayload};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users.list()?))
}

async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Result<Json<User>> {
    Ok(Json(state.users.get(id)?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users.create(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    Ok(Json(state.users.update(id, payload)?))
}

async fn delete_user(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Result<StatusCode> {
    state.users.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
