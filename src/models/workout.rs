use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recurring workout slot within a plan, pinned to a weekday name
/// ("Monday" through "Sunday", matched case-insensitively).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
  pub id: i64,
  pub training_plan_id: i64,
  pub name: String,
  pub description: Option<String>,
  pub day_of_week: String,
  pub workout_type: Option<String>,
  pub duration_minutes: Option<i64>,
  pub calories_burned: Option<i64>,
  pub completed: bool,
  pub completed_at: Option<NaiveDateTime>,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

/// For inserting new workouts (without id, completion state, timestamps)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub training_plan_id: i64,
  pub name: String,
  pub description: Option<String>,
  pub day_of_week: String,
  pub workout_type: Option<String>,
  pub duration_minutes: Option<i64>,
  pub calories_burned: Option<i64>,
}

/// Editable workout fields; completion state is only touched by
/// [`crate::training::complete_workout`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutUpdate {
  pub name: String,
  pub description: Option<String>,
  pub day_of_week: String,
  pub workout_type: Option<String>,
  pub duration_minutes: Option<i64>,
  pub calories_burned: Option<i64>,
}
