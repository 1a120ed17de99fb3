use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
  #[error("Unknown weekday: {0}")]
  UnknownWeekday(String),

  #[error("Training plan {0} not found")]
  PlanNotFound(i64),

  #[error("Workout {0} not found")]
  WorkoutNotFound(i64),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

impl Serialize for TrainingError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}
