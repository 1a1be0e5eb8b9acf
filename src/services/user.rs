// SPDX-License-Identifier: MIT

//! User service.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{User, UserPayload};
use std::sync::Arc;
use validator::Validate;

/// Manages user profiles.
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All users.
    pub fn list(&self) -> Result<Vec<User>> {
        self.db.users.find_all()
    }

    /// User by id.
    pub fn get(&self, id: u64) -> Result<User> {
        self.db
            .users
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))
    }

    /// Create a new user. `name` must be non-empty.
    pub fn create(&self, payload: UserPayload) -> Result<User> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let stored = self.db.users.save(User {
            id: None,
            name: payload.name,
        })?;

        tracing::info!(id = ?stored.id, "Created user");
        Ok(stored)
    }

    /// Overwrite the profile of an existing user.
    pub fn update(&self, id: u64, payload: UserPayload) -> Result<User> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut user = self.get(id)?;
        user.name = payload.name;
        self.db.users.save(user)
    }

    /// Delete a user. Workouts referencing the user keep their `user_id`;
    /// deletes never cascade in this system.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.get(id)?;
        self.db.users.delete(id)?;
        tracing::info!(id, "Deleted user");
        Ok(())
    }
}
