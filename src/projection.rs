//! Materialized calendar projection of the active training plan
//!
//! The projection stores concrete "trainingsplan" event rows for the plan's
//! weekly recurrence instead of expanding the rule at read time. It is
//! derived state: every regeneration deletes the user's entire projection
//! and rebuilds it from the plan's incomplete workouts, so event identity
//! never survives a rebuild. The window only advances when something writes
//! to the plan; with no writes the projection goes stale as dates pass.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::SqlitePool;

use crate::error::TrainingError;
use crate::models::{NewCalendarEvent, TrainingPlan, Workout};
use crate::occurrence::{next_occurrence, window_end};
use crate::store;

/// Category tag of derived projection events, wiped on every regeneration
pub const TRAINING_CATEGORY: &str = "trainingsplan";

/// Category tag of permanent completion-history events
pub const FITNESS_CATEGORY: &str = "fitness";

/// Amber accent for projected sessions
pub const TRAINING_COLOR: &str = "#f59e0b";

/// Green accent for completed sessions
pub const FITNESS_COLOR: &str = "#10b981";

pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Projected sessions start at 09:00 local time
const SESSION_START_HOUR: u32 = 9;

pub(crate) fn session_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(SESSION_START_HOUR, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

pub(crate) fn session_duration(workout: &Workout) -> Duration {
    Duration::minutes(workout.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
}

/// Rebuild the user's "trainingsplan" events from the plan's incomplete
/// workouts.
///
/// Destructive regeneration: the existing projection is deleted wholesale,
/// then each incomplete workout contributes its occurrence in the current
/// cycle plus the one a week later, capped at the window ceiling (at most
/// two events per workout). There is no transaction spanning the delete and
/// the inserts; a failure in between leaves the user without a projection
/// until the next successful trigger. Returns the number of events written.
pub async fn regenerate(
    pool: &SqlitePool,
    plan: &TrainingPlan,
    today: NaiveDate,
) -> Result<usize, TrainingError> {
    let existing =
        store::find_events_by_user_and_category(pool, plan.user_id, TRAINING_CATEGORY).await?;
    for event in &existing {
        store::delete_event(pool, event.id).await?;
    }

    let workouts = store::find_incomplete_workouts(pool, plan.id).await?;
    let end = window_end(today);

    let mut created = 0;
    for workout in &workouts {
        let anchor = next_occurrence(today, &workout.day_of_week)?;

        for week_offset in 0..2 {
            let event_date = anchor + Duration::weeks(week_offset);
            if event_date > end {
                continue;
            }

            let start = session_start(event_date);
            store::insert_event(
                pool,
                &NewCalendarEvent {
                    user_id: plan.user_id,
                    title: format!("🏋️ {}", workout.name),
                    description: workout.description.clone(),
                    start_time: start,
                    end_time: start + session_duration(workout),
                    category: TRAINING_CATEGORY.to_string(),
                    color: TRAINING_COLOR.to_string(),
                    all_day: false,
                    location: None,
                },
            )
            .await?;
            created += 1;
        }
    }

    tracing::debug!(
        plan_id = plan.id,
        user_id = plan.user_id,
        deleted = existing.len(),
        created,
        "regenerated training projection"
    );

    Ok(created)
}
