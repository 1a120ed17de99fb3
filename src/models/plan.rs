use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A named weekly training plan. At most one plan per user is active;
/// only the active plan drives the calendar projection.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrainingPlan {
  pub id: i64,
  pub user_id: i64,
  pub name: String,
  pub description: Option<String>,
  pub active: bool,
  pub goal: Option<String>,
  pub duration_weeks: Option<i64>,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

/// For inserting new plans (without id, timestamps). New plans start inactive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrainingPlan {
  pub user_id: i64,
  pub name: String,
  pub description: Option<String>,
  pub goal: Option<String>,
  pub duration_weeks: Option<i64>,
}
