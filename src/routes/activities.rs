// SPDX-License-Identifier: MIT

//! Activity instance routes.

use crate::error::Result;
use crate::models::{Activity, ActivityPayload};
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
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
}

async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    Ok(Json(state.activities.list()?))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.get(id)?))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActivityPayload>,
) -> Result<(StatusCode, Json<Activity>)> {
    let activity = state.activities.create(payload)?;
    Ok((StatusCode::CREATED, Json(activity)))
}

async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.update(id, payload)?))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.activities.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
