// SPDX-License-Identifier: MIT

//! Workout routes.

use crate::error::Result;
use crate::models::{Workout, WorkoutPayload};
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
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/user/{user_id}", get(list_workouts_by_user))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.workouts.list()?))
}

async fn list_workouts_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.workouts.list_by_user(user_id)?))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Workout>> {
    Ok(Json(state.workouts.get(id)?))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<(StatusCode, Json<Workout>)> {
    let workout = state.workouts.create(payload)?;
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<Json<Workout>> {
    Ok(Json(state.workouts.update(id, payload)?))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.workouts.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
