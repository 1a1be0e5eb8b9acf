// SPDX-License-Identifier: MIT

//! Workout Tracker: users perform workouts composed of activity instances,
//! each referencing an exercise catalog entry.
//!
//! This crate provides the backend API and the relational rules between
//! the four entity types (User, ActivityMaster, Activity, Workout).

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Database;
use services::{ActivityService, CatalogService, UserService, WorkoutService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
    pub activities: ActivityService,
    pub workouts: WorkoutService,
    pub users: UserService,
}

impl AppState {
    /// Build the state: each service gets the shared store passed in
    /// explicitly at construction.
    pub fn new(config: Config, db: Arc<Database>) -> Self {
        Self {
            config,
            catalog: CatalogService::new(db.clone()),
            activities: ActivityService::new(db.clone()),
            workouts: WorkoutService::new(db.clone()),
            users: UserService::new(db),
        }
    }
}
