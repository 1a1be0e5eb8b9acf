// SPDX-License-Identifier: MIT

//! Activity instance service.
//!
//! Create and update resolve the referenced catalog entry before anything
//! is written; a dangling `activity_master_id` is never persisted.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityPayload};
use std::sync::Arc;

/// Manages performed activity instances.
pub struct ActivityService {
    db: Arc<Database>,
}

impl ActivityService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All activity instances.
    pub fn list(&self) -> Result<Vec<Activity>> {
        self.db.activities.find_all()
    }

    /// Activity instance by id.
    pub fn get(&self, id: u64) -> Result<Activity> {
        self.db
            .activities
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Activity not found with id: {}", id)))
    }

    /// Create a new activity instance referencing an existing catalog entry.
    pub fn create(&self, payload: ActivityPayload) -> Result<Activity> {
        self.resolve_master(payload.activity_master_id)?;

        let stored = self.db.activities.save(Activity {
            id: None,
            activity_master_id: payload.activity_master_id,
            sets: payload.sets,
            reps: payload.reps,
            weight: payload.weight,
            duration: payload.duration,
            distance: payload.distance,
            date_time: payload.date_time,
        })?;

        tracing::info!(
            id = ?stored.id,
            activity_master_id = stored.activity_master_id,
            "Created activity"
        );
        Ok(stored)
    }

    /// Overwrite all fields of an existing activity instance.
    ///
    /// The catalog reference is re-validated exactly as on create; a
    /// changed reference must still resolve. Workout association sets are
    /// owned by the workouts and are untouched by this operation.
    pub fn update(&self, id: u64, payload: ActivityPayload) -> Result<Activity> {
        let mut activity = self.get(id)?;
        self.resolve_master(payload.activity_master_id)?;

        activity.activity_master_id = payload.activity_master_id;
        activity.sets = payload.sets;
        activity.reps = payload.reps;
        activity.weight = payload.weight;
        activity.duration = payload.duration;
        activity.distance = payload.distance;
        activity.date_time = payload.date_time;
        self.db.activities.save(activity)
    }

    /// Delete an activity instance.
    ///
    /// Does not cascade into workout association sets; a workout may come
    /// to reference a deleted activity id.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.get(id)?;
        self.db.activities.delete(id)?;
        tracing::info!(id, "Deleted activity");
        Ok(())
    }

    /// Check the catalog reference resolves. The failure kind is distinct
    /// from a missing activity so callers can tell "the thing you asked
    /// for is missing" from "the thing you're linking to is missing".
    fn resolve_master(&self, activity_master_id: u64) -> Result<()> {
        self.db
            .activity_masters
            .find_by_id(activity_master_id)?
            .map(|_| ())
            .ok_or_else(|| {
                AppError::InvalidReference(format!(
                    "ActivityMaster not found with id: {}",
                    activity_master_id
                ))
            })
    }
}
