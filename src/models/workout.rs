// SPDX-License-Identifier: MIT

//! Workout model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// A named, dated collection of activity instances performed by one user.
///
/// The workout↔activity association is many-to-many and owned by the
/// workout: `activities` holds activity ids, membership only, no ordering
/// significance. Deleting a workout removes its association set with it;
/// deleting an activity does not reach back into workouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Assigned by the store on first insert; absent until then
    #[serde(default)]
    pub id: Option<u64>,
    /// Workout name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Calendar date of the workout
    pub date: Option<NaiveDate>,
    /// Duration in minutes
    pub duration: Option<f64>,
    /// Owning user, if any
    pub user_id: Option<u64>,
    /// Ids of the activity instances in this workout
    pub activities: BTreeSet<u64>,
}

/// Mutable fields of a workout, as accepted on create/update.
///
/// Updates replace every field wholesale, including the whole `activities`
/// set; there is no incremental add/remove.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub activities: BTreeSet<u64>,
}
