use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Walking,
    Running,
    Cycling,
    Swimming,
    Gym,
    Tennis,
    Baseball,
    Soccer,
    Volleyball,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 9] = [
        ExerciseType::Walking,
        ExerciseType::Running,
        ExerciseType::Cycling,
        ExerciseType::Swimming,
        ExerciseType::Gym,
        ExerciseType::Tennis,
        ExerciseType::Baseball,
        ExerciseType::Soccer,
        ExerciseType::Volleyball,
    ];

    /// Average kcal burned per minute.
    pub fn calories_per_min(self) -> u32 {
        match self {
            ExerciseType::Walking => 4,
            ExerciseType::Running => 10,
            ExerciseType::Cycling => 8,
            ExerciseType::Swimming => 12,
            ExerciseType::Gym => 6,
            ExerciseType::Tennis => 7,
            ExerciseType::Baseball => 5,
            ExerciseType::Soccer => 11,
            ExerciseType::Volleyball => 8,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ExerciseType::Walking => "walking",
            ExerciseType::Running => "running",
            ExerciseType::Cycling => "cycling",
            ExerciseType::Swimming => "swimming",
            ExerciseType::Gym => "gym",
            ExerciseType::Tennis => "tennis",
            ExerciseType::Baseball => "baseball",
            ExerciseType::Soccer => "soccer",
            ExerciseType::Volleyball => "volleyball",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseType::Walking => "Walking",
            ExerciseType::Running => "Running",
            ExerciseType::Cycling => "Cycling",
            ExerciseType::Swimming => "Swimming",
            ExerciseType::Gym => "Gym",
            ExerciseType::Tennis => "Tennis",
            ExerciseType::Baseball => "Baseball",
            ExerciseType::Soccer => "Soccer",
            ExerciseType::Volleyball => "Volleyball",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExerciseType(pub String);

impl fmt::Display for UnknownExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exercise type '{}'", self.0)
    }
}

impl std::error::Error for UnknownExerciseType {}

impl FromStr for ExerciseType {
    type Err = UnknownExerciseType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ExerciseType::ALL
            .into_iter()
            .find(|kind| kind.slug() == value)
            .ok_or_else(|| UnknownExerciseType(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub exercise_type: ExerciseType,
    pub duration: u32,
    pub calories: u32,
}

/// Submitted entry, before the duration check.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExercise {
    pub exercise_type: ExerciseType,
    pub date: NaiveDate,
    pub duration: i64,
}

/// HTML form body. A cleared number input arrives as an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseForm {
    pub exercise_type: ExerciseType,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration: String,
}

impl ExerciseForm {
    /// Empty or non-numeric durations become 0 so they fail the duration check.
    pub fn into_new_exercise(self) -> NewExercise {
        NewExercise {
            exercise_type: self.exercise_type,
            date: self.date,
            duration: self.duration.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoalForm {
    pub goal: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalRequest {
    pub goal_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct ExerciseTypeInfo {
    pub exercise_type: ExerciseType,
    pub label: &'static str,
    pub calories_per_min: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationPoint {
    pub date: NaiveDate,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaloriesPoint {
    pub exercise_type: ExerciseType,
    pub label: &'static str,
    pub calories: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal_minutes: u32,
    pub weekly_minutes: u64,
    pub fraction: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub today: NaiveDate,
    pub progress: GoalProgress,
    pub records: Vec<ExerciseRecord>,
    pub duration_by_date: Vec<DurationPoint>,
    pub calories_by_type: Vec<CaloriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_parse_back_to_their_type() {
        for kind in ExerciseType::ALL {
            assert_eq!(kind.slug().parse::<ExerciseType>(), Ok(kind));
        }
        assert!("yoga".parse::<ExerciseType>().is_err());
    }

    #[test]
    fn form_duration_falls_back_to_zero() {
        let form = |duration: &str| ExerciseForm {
            exercise_type: ExerciseType::Running,
            date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
            duration: duration.to_string(),
        };
        assert_eq!(form("").into_new_exercise().duration, 0);
        assert_eq!(form("abc").into_new_exercise().duration, 0);
        assert_eq!(form(" 45 ").into_new_exercise().duration, 45);
        assert_eq!(form("-5").into_new_exercise().duration, -5);
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&ExerciseType::Volleyball).unwrap();
        assert_eq!(json, "\"volleyball\"");
        let parsed: ExerciseType = serde_json::from_str("\"swimming\"").unwrap();
        assert_eq!(parsed, ExerciseType::Swimming);
    }
}
