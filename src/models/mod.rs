// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod user;
pub mod workout;

pub use activity::{Activity, ActivityMaster, ActivityMasterPayload, ActivityPayload};
pub use user::{User, UserPayload};
pub use workout::{Workout, WorkoutPayload};
