//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seed factories for plans, workouts, and calendar events
//! - Fixed-date helpers pinned to a known calendar week

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{NewCalendarEvent, NewTrainingPlan, NewWorkout, TrainingPlan, Workout};
use crate::store;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Seed Factories
/// ---------------------------------------------------------------------------

/// Seed a training plan. Activation normally goes through the workflow;
/// tests that need a pre-activated plan write the flag directly.
pub async fn seed_plan(pool: &SqlitePool, user_id: i64, name: &str, active: bool) -> TrainingPlan {
  let plan = store::create_plan(
    pool,
    &NewTrainingPlan {
      user_id,
      name: name.to_string(),
      description: None,
      goal: None,
      duration_weeks: None,
    },
  )
  .await
  .expect("Failed to seed plan");

  if active {
    sqlx::query("UPDATE training_plans SET active = 1 WHERE id = ?1")
      .bind(plan.id)
      .execute(pool)
      .await
      .expect("Failed to activate seeded plan");
  }

  store::find_plan(pool, plan.id)
    .await
    .expect("Failed to reload seeded plan")
    .expect("Seeded plan missing")
}

/// Seed a workout slot on the given weekday name
pub async fn seed_workout(
  pool: &SqlitePool,
  plan_id: i64,
  name: &str,
  day_of_week: &str,
  duration_minutes: Option<i64>,
) -> Workout {
  store::insert_workout(
    pool,
    &NewWorkout {
      training_plan_id: plan_id,
      name: name.to_string(),
      description: None,
      day_of_week: day_of_week.to_string(),
      workout_type: None,
      duration_minutes,
      calories_burned: None,
    },
  )
  .await
  .expect("Failed to seed workout")
}

/// Seed a calendar event starting 09:00 on the given date
pub async fn seed_event(
  pool: &SqlitePool,
  user_id: i64,
  title: &str,
  category: &str,
  date: NaiveDate,
) -> i64 {
  let start = date.and_hms_opt(9, 0, 0).expect("valid time");
  store::insert_event(
    pool,
    &NewCalendarEvent {
      user_id,
      title: title.to_string(),
      description: None,
      start_time: start,
      end_time: start + chrono::Duration::hours(1),
      category: category.to_string(),
      color: "#3b82f6".to_string(),
      all_day: false,
      location: None,
    },
  )
  .await
  .expect("Failed to seed event")
}

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------
/// Pinned to the week of 2025-06-02 so weekday expectations stay stable.

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// 2025-06-01, a Sunday
pub fn sunday() -> NaiveDate {
  date(2025, 6, 1)
}

/// 2025-06-02, a Monday
pub fn monday() -> NaiveDate {
  date(2025, 6, 2)
}

/// 2025-06-04, a Wednesday
pub fn wednesday() -> NaiveDate {
  date(2025, 6, 4)
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Datelike;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('training_plans', 'workouts', 'calendar_events')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 3, "Expected 3 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_factories_round_trip() {
    let pool = setup_test_db().await;

    let plan = seed_plan(&pool, 7, "Plan", true).await;
    assert!(plan.active);
    assert_eq!(plan.user_id, 7);

    let workout = seed_workout(&pool, plan.id, "Bench", "Monday", Some(45)).await;
    assert_eq!(workout.day_of_week, "Monday");
    assert_eq!(workout.duration_minutes, Some(45));
    assert!(!workout.completed);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_date_helpers_fall_on_expected_weekdays() {
    assert_eq!(sunday().weekday(), chrono::Weekday::Sun);
    assert_eq!(monday().weekday(), chrono::Weekday::Mon);
    assert_eq!(wednesday().weekday(), chrono::Weekday::Wed);
  }
}
