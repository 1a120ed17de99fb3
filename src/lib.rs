//! Training plan to calendar synchronization engine.
//!
//! A weekly-recurring training plan is projected onto concrete calendar
//! events inside a rolling two-week window. Any write to the plan or its
//! workouts rebuilds the projection; completing a workout additionally
//! records a permanent history event.

pub mod db;
pub mod error;
pub mod models;
pub mod occurrence;
pub mod projection;
pub mod store;
pub mod training;

#[cfg(test)]
pub mod test_utils;

pub use db::DbPool;
pub use error::TrainingError;
pub use models::{CalendarEvent, TrainingPlan, Workout};
