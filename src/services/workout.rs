// SPDX-License-Identifier: MIT

//! Workout service.
//!
//! A workout owns its activity association set: updates replace the whole
//! set as supplied, and deleting a workout removes the set with it. The
//! `user_id` and activity ids are stored as given, without existence
//! checks.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutPayload};
use std::sync::Arc;
use validator::Validate;

/// Manages workouts and their activity associations.
pub struct WorkoutService {
    db: Arc<Database>,
}

impl WorkoutService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All workouts.
    pub fn list(&self) -> Result<Vec<Workout>> {
        self.db.workouts.find_all()
    }

    /// Workouts owned by the given user; empty when none match.
    pub fn list_by_user(&self, user_id: u64) -> Result<Vec<Workout>> {
        self.db.find_workouts_by_user(user_id)
    }

    /// Workout by id.
    pub fn get(&self, id: u64) -> Result<Workout> {
        self.db
            .workouts
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Workout not found with id: {}", id)))
    }

    /// Create a new workout. `name` must be non-empty.
    pub fn create(&self, payload: WorkoutPayload) -> Result<Workout> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let stored = self.db.workouts.save(Workout {
            id: None,
            name: payload.name,
            description: payload.description,
            date: payload.date,
            duration: payload.duration,
            user_id: payload.user_id,
            activities: payload.activities,
        })?;

        tracing::info!(
            id = ?stored.id,
            name = %stored.name,
            activities = stored.activities.len(),
            "Created workout"
        );
        Ok(stored)
    }

    /// Replace every mutable field of an existing workout, including the
    /// entire activity association set and the user reference.
    pub fn update(&self, id: u64, payload: WorkoutPayload) -> Result<Workout> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut workout = self.get(id)?;
        workout.name = payload.name;
        workout.description = payload.description;
        workout.date = payload.date;
        workout.duration = payload.duration;
        workout.user_id = payload.user_id;
        workout.activities = payload.activities;
        self.db.workouts.save(workout)
    }

    /// Delete a workout. The association set is part of the record and is
    /// removed with it; the referenced activities themselves survive.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.get(id)?;
        self.db.workouts.delete(id)?;
        tracing::info!(id, "Deleted workout");
        Ok(())
    }
}
