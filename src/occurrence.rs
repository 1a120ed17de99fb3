//! Weekly occurrence arithmetic
//!
//! Pure date helpers for the calendar projection: mapping a weekday name to
//! its next concrete date, and computing the ceiling of the rolling two-week
//! window. No clock access; callers inject the reference date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::TrainingError;

/// Parse one of the seven full weekday names, case-insensitively.
pub fn parse_weekday(name: &str) -> Result<Weekday, TrainingError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(TrainingError::UnknownWeekday(name.to_string())),
    }
}

/// Next date on or after `from` that falls on the named weekday.
///
/// If `from` already falls on it, `from` itself is the occurrence. The
/// result is always within `[from, from + 6 days]`.
pub fn next_occurrence(from: NaiveDate, day_of_week: &str) -> Result<NaiveDate, TrainingError> {
    let target = parse_weekday(day_of_week)?;
    let days_ahead = i64::from(target.num_days_from_monday())
        - i64::from(from.weekday().num_days_from_monday());
    Ok(from + Duration::days(days_ahead.rem_euclid(7)))
}

/// Ceiling of the projection window: the Sunday of the week after the
/// current one.
///
/// The next Sunday is taken strictly after `today`, so when `today` is a
/// Sunday the window reaches a full two weeks out.
pub fn window_end(today: NaiveDate) -> NaiveDate {
    let until_sunday = (i64::from(Weekday::Sun.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);

    let next_sunday = if until_sunday == 0 {
        today + Duration::days(7)
    } else {
        today + Duration::days(until_sunday)
    };

    next_sunday + Duration::days(7)
}
