// SPDX-License-Identifier: MIT

//! Exercise catalog entries and performed activity instances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named exercise definition (e.g. "Bench Press"), independent of any
/// specific performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMaster {
    /// Assigned by the store on first insert; absent until then
    #[serde(default)]
    pub id: Option<u64>,
    /// Exercise name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

/// Mutable fields of a catalog entry, as accepted on create/update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivityMasterPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One performed instance of an exercise, referencing exactly one catalog
/// entry by id. Workouts reference activities by id in their association
/// sets; the activity record itself carries no back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Assigned by the store on first insert; absent until then
    #[serde(default)]
    pub id: Option<u64>,
    /// Catalog entry this performance is an instance of
    pub activity_master_id: u64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub duration: Option<f64>,
    pub distance: Option<f64>,
    /// When the activity was performed
    pub date_time: Option<DateTime<Utc>>,
}

/// Mutable fields of an activity, as accepted on create/update.
///
/// `activity_master_id` is the only required field; it must resolve to an
/// existing catalog entry before the write is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPayload {
    pub activity_master_id: u64,
    #[serde(default)]
    pub sets: Option<i32>,
    #[serde(default)]
    pub reps: Option<i32>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
}
