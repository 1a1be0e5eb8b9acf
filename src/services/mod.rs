// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod activity;
pub mod catalog;
pub mod user;
pub mod workout;

pub use activity::ActivityService;
pub use catalog::CatalogService;
pub use user::UserService;
pub use workout::WorkoutService;
