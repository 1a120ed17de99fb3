use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A calendar event row. The engine writes two disjoint categories:
/// "trainingsplan" events are derived state, wiped and rebuilt on every
/// regeneration; "fitness" events are permanent completion history.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CalendarEvent {
  pub id: i64,
  pub user_id: i64,
  pub title: String,
  pub description: Option<String>,
  pub start_time: NaiveDateTime,
  pub end_time: NaiveDateTime,
  pub category: String,
  pub color: String,
  pub all_day: bool,
  pub location: Option<String>,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

/// For inserting new events (without id, timestamps)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalendarEvent {
  pub user_id: i64,
  pub title: String,
  pub description: Option<String>,
  pub start_time: NaiveDateTime,
  pub end_time: NaiveDateTime,
  pub category: String,
  pub color: String,
  pub all_day: bool,
  pub location: Option<String>,
}
