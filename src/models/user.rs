//! User model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User profile. Workouts point back at a user via `Workout::user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on first insert; absent until then
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name
    pub name: String,
}

/// Mutable fields of a user, as accepted on create/update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
