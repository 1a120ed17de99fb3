//! Plan and workout write paths
//!
//! Every write that can change the projection (adding, editing, completing,
//! or removing a workout, and activating a plan) re-materializes the
//! calendar projection, but only while the owning plan is active. Inactive
//! plans never materialize.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::error::TrainingError;
use crate::models::{NewCalendarEvent, NewWorkout, TrainingPlan, Workout, WorkoutUpdate};
use crate::projection::{self, FITNESS_CATEGORY, FITNESS_COLOR};
use crate::store;

async fn regenerate_if_active(
    pool: &SqlitePool,
    plan_id: i64,
    today: NaiveDate,
) -> Result<(), TrainingError> {
    let plan = store::find_plan(pool, plan_id)
        .await?
        .ok_or(TrainingError::PlanNotFound(plan_id))?;
    if plan.active {
        projection::regenerate(pool, &plan, today).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Workout lifecycle
// ---------------------------------------------------------------------------

/// Add a workout to a plan and refresh the projection if the plan is active
pub async fn add_workout(
    pool: &SqlitePool,
    new: NewWorkout,
    today: NaiveDate,
) -> Result<Workout, TrainingError> {
    let plan = store::find_plan(pool, new.training_plan_id)
        .await?
        .ok_or(TrainingError::PlanNotFound(new.training_plan_id))?;

    let workout = store::insert_workout(pool, &new).await?;

    if plan.active {
        projection::regenerate(pool, &plan, today).await?;
    }

    Ok(workout)
}

/// Overwrite a workout's editable fields and refresh the projection
pub async fn update_workout(
    pool: &SqlitePool,
    workout_id: i64,
    update: WorkoutUpdate,
    today: NaiveDate,
) -> Result<Workout, TrainingError> {
    let mut workout = store::find_workout(pool, workout_id)
        .await?
        .ok_or(TrainingError::WorkoutNotFound(workout_id))?;

    workout.name = update.name;
    workout.description = update.description;
    workout.day_of_week = update.day_of_week;
    workout.workout_type = update.workout_type;
    workout.duration_minutes = update.duration_minutes;
    workout.calories_burned = update.calories_burned;

    store::update_workout_row(pool, &workout).await?;
    regenerate_if_active(pool, workout.training_plan_id, today).await?;

    Ok(workout)
}

/// Delete a workout; its projected occurrences disappear on the rebuild
pub async fn remove_workout(
    pool: &SqlitePool,
    workout_id: i64,
    today: NaiveDate,
) -> Result<(), TrainingError> {
    let workout = store::find_workout(pool, workout_id)
        .await?
        .ok_or(TrainingError::WorkoutNotFound(workout_id))?;

    store::delete_workout(pool, workout_id).await?;
    regenerate_if_active(pool, workout.training_plan_id, today).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Completion Recorder
// ---------------------------------------------------------------------------

/// Mark a workout completed at `now`.
///
/// Writes exactly one permanent "fitness" history event, then rebuilds the
/// projection so the completed workout's future occurrences drop out of it.
pub async fn complete_workout(
    pool: &SqlitePool,
    workout_id: i64,
    now: NaiveDateTime,
) -> Result<Workout, TrainingError> {
    let mut workout = store::find_workout(pool, workout_id)
        .await?
        .ok_or(TrainingError::WorkoutNotFound(workout_id))?;

    workout.completed = true;
    workout.completed_at = Some(now);
    store::update_workout_row(pool, &workout).await?;

    let plan = store::find_plan(pool, workout.training_plan_id)
        .await?
        .ok_or(TrainingError::PlanNotFound(workout.training_plan_id))?;

    store::insert_event(
        pool,
        &NewCalendarEvent {
            user_id: plan.user_id,
            title: format!("✅ {}", workout.name),
            description: workout.description.clone(),
            start_time: now,
            end_time: now + projection::session_duration(&workout),
            category: FITNESS_CATEGORY.to_string(),
            color: FITNESS_COLOR.to_string(),
            all_day: false,
            location: None,
        },
    )
    .await?;

    if plan.active {
        projection::regenerate(pool, &plan, now.date()).await?;
    }

    tracing::info!(workout_id, plan_id = plan.id, "workout completed");

    Ok(workout)
}

// ---------------------------------------------------------------------------
// Activation Workflow
// ---------------------------------------------------------------------------

/// Activate a plan and build its first projection.
///
/// At most one plan per user is active: every other active plan of the user
/// is deactivated in the same transaction that activates this one, so two
/// racing activations cannot leave two active plans behind. There is no
/// explicit deactivate; a plan only loses the flag when another one is
/// activated.
pub async fn activate_plan(
    pool: &SqlitePool,
    plan_id: i64,
    user_id: i64,
    today: NaiveDate,
) -> Result<TrainingPlan, TrainingError> {
    if store::find_plan(pool, plan_id).await?.is_none() {
        return Err(TrainingError::PlanNotFound(plan_id));
    }

    let mut tx = pool.begin().await?;

    let plans: Vec<TrainingPlan> =
        sqlx::query_as("SELECT * FROM training_plans WHERE user_id = ?1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

    for other in plans.iter().filter(|p| p.active && p.id != plan_id) {
        sqlx::query("UPDATE training_plans SET active = 0, updated_at = datetime('now') WHERE id = ?1")
            .bind(other.id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("UPDATE training_plans SET active = 1, updated_at = datetime('now') WHERE id = ?1")
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let plan = store::find_plan(pool, plan_id)
        .await?
        .ok_or(TrainingError::PlanNotFound(plan_id))?;
    projection::regenerate(pool, &plan, today).await?;

    tracing::info!(plan_id, user_id, "training plan activated");

    Ok(plan)
}
