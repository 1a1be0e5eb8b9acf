// SPDX-License-Identifier: MIT

//! Exercise catalog routes.

use crate::error::Result;
use crate::models::{ActivityMaster, ActivityMasterPayload};
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
        .route(
            "/api/activity-master-list",
            get(list_masters).post(create_master),
        )
        .route(
            "/api/activity-master-list/{id}",
            get(get_master).put(update_master).delete(delete_master),
        )
}

async fn list_masters(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ActivityMaster>>> {
    Ok(Json(state.catalog.list()?))
}

async fn get_master(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ActivityMaster>> {
    Ok(Json(state.catalog.get(id)?))
}

async fn create_master(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActivityMasterPayload>,
) -> Result<(StatusCode, Json<ActivityMaster>)> {
    let master = state.catalog.create(payload)?;
    Ok((StatusCode::CREATED, Json(master)))
}

async fn update_master(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<ActivityMasterPayload>,
) -> Result<Json<ActivityMaster>> {
    Ok(Json(state.catalog.update(id, payload)?))
}

async fn delete_master(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.catalog.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
