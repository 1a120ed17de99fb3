pub mod event;
pub mod plan;
pub mod workout;

pub use event::{CalendarEvent, NewCalendarEvent};
pub use plan::{NewTrainingPlan, TrainingPlan};
pub use workout::{NewWorkout, Workout, WorkoutUpdate};
