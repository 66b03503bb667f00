use crate::errors::AppError;
use crate::models::{ExerciseType, NewExercise};
use chrono::NaiveDate;

pub const INVALID_DURATION_MESSAGE: &str = "Duration must be greater than 0 minutes.";

/// An entry that passed validation and carries its calories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidExercise {
    pub date: NaiveDate,
    pub exercise_type: ExerciseType,
    pub duration: u32,
    pub calories: u32,
}

pub fn calculate_calories(exercise_type: ExerciseType, duration: u32) -> u32 {
    duration.saturating_mul(exercise_type.calories_per_min())
}

pub fn validate(entry: &NewExercise) -> Result<ValidExercise, AppError> {
    if entry.duration <= 0 {
        return Err(AppError::bad_request(INVALID_DURATION_MESSAGE));
    }
    let duration = u32::try_from(entry.duration)
        .map_err(|_| AppError::bad_request("Duration is too large."))?;

    Ok(ValidExercise {
        date: entry.date,
        exercise_type: entry.exercise_type,
        duration,
        calories: calculate_calories(entry.exercise_type, duration),
    })
}
