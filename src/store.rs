//! SQLite-backed stores for plans, workouts, and calendar events
//!
//! Thin persistence layer the synchronization engine runs against. All
//! functions operate on a shared pool; storage errors propagate unchanged.

use sqlx::SqlitePool;

use crate::error::TrainingError;
use crate::models::{
    CalendarEvent, NewCalendarEvent, NewTrainingPlan, NewWorkout, TrainingPlan, Workout,
};

// ---------------------------------------------------------------------------
// Training plans
// ---------------------------------------------------------------------------

/// Insert a new plan. Plans always start inactive; only the activation
/// workflow flips the flag.
pub async fn create_plan(
    pool: &SqlitePool,
    new: &NewTrainingPlan,
) -> Result<TrainingPlan, TrainingError> {
    let result = sqlx::query(
        r#"
        INSERT INTO training_plans (user_id, name, description, goal, duration_weeks)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(new.user_id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(&new.goal)
    .bind(new.duration_weeks)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_plan(pool, id)
        .await?
        .ok_or(TrainingError::PlanNotFound(id))
}

pub async fn find_plan(pool: &SqlitePool, id: i64) -> Result<Option<TrainingPlan>, TrainingError> {
    let plan = sqlx::query_as::<_, TrainingPlan>("SELECT * FROM training_plans WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(plan)
}

pub async fn find_plans_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<TrainingPlan>, TrainingError> {
    let plans = sqlx::query_as::<_, TrainingPlan>(
        "SELECT * FROM training_plans WHERE user_id = ?1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(plans)
}

pub async fn find_active_plan(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<TrainingPlan>, TrainingError> {
    let plan = sqlx::query_as::<_, TrainingPlan>(
        "SELECT * FROM training_plans WHERE user_id = ?1 AND active = 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(plan)
}

// ---------------------------------------------------------------------------
// Workouts
// ---------------------------------------------------------------------------

pub async fn insert_workout(
    pool: &SqlitePool,
    new: &NewWorkout,
) -> Result<Workout, TrainingError> {
    let result = sqlx::query(
        r#"
        INSERT INTO workouts (
            training_plan_id, name, description, day_of_week,
            workout_type, duration_minutes, calories_burned
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(new.training_plan_id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(&new.day_of_week)
    .bind(&new.workout_type)
    .bind(new.duration_minutes)
    .bind(new.calories_burned)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_workout(pool, id)
        .await?
        .ok_or(TrainingError::WorkoutNotFound(id))
}

pub async fn find_workout(pool: &SqlitePool, id: i64) -> Result<Option<Workout>, TrainingError> {
    let workout = sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(workout)
}

pub async fn find_workouts_by_plan(
    pool: &SqlitePool,
    plan_id: i64,
) -> Result<Vec<Workout>, TrainingError> {
    let workouts = sqlx::query_as::<_, Workout>(
        "SELECT * FROM workouts WHERE training_plan_id = ?1 ORDER BY day_of_week ASC",
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;
    Ok(workouts)
}

/// Workouts of a plan that still feed the projection
pub async fn find_incomplete_workouts(
    pool: &SqlitePool,
    plan_id: i64,
) -> Result<Vec<Workout>, TrainingError> {
    let workouts = sqlx::query_as::<_, Workout>(
        r#"
        SELECT * FROM workouts
        WHERE training_plan_id = ?1 AND completed = 0
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;
    Ok(workouts)
}

/// Persist every mutable workout field, including completion state
pub async fn update_workout_row(
    pool: &SqlitePool,
    workout: &Workout,
) -> Result<(), TrainingError> {
    sqlx::query(
        r#"
        UPDATE workouts
        SET name = ?1,
            description = ?2,
            day_of_week = ?3,
            workout_type = ?4,
            duration_minutes = ?5,
            calories_burned = ?6,
            completed = ?7,
            completed_at = ?8,
            updated_at = datetime('now')
        WHERE id = ?9
        "#,
    )
    .bind(&workout.name)
    .bind(&workout.description)
    .bind(&workout.day_of_week)
    .bind(&workout.workout_type)
    .bind(workout.duration_minutes)
    .bind(workout.calories_burned)
    .bind(workout.completed)
    .bind(workout.completed_at)
    .bind(workout.id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_workout(pool: &SqlitePool, id: i64) -> Result<(), TrainingError> {
    sqlx::query("DELETE FROM workouts WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Calendar events
// ---------------------------------------------------------------------------

pub async fn find_events_by_user_and_category(
    pool: &SqlitePool,
    user_id: i64,
    category: &str,
) -> Result<Vec<CalendarEvent>, TrainingError> {
    let events = sqlx::query_as::<_, CalendarEvent>(
        r#"
        SELECT * FROM calendar_events
        WHERE user_id = ?1 AND category = ?2
        ORDER BY start_time ASC
        "#,
    )
    .bind(user_id)
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(events)
}

pub async fn insert_event(
    pool: &SqlitePool,
    new: &NewCalendarEvent,
) -> Result<i64, TrainingError> {
    let result = sqlx::query(
        r#"
        INSERT INTO calendar_events (
            user_id, title, description, start_time, end_time,
            category, color, all_day, location
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(new.user_id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.start_time)
    .bind(new.end_time)
    .bind(&new.category)
    .bind(&new.color)
    .bind(new.all_day)
    .bind(&new.location)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<(), TrainingError> {
    sqlx::query("DELETE FROM calendar_events WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
