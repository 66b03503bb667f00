use crate::models::{
    CaloriesPoint, DashboardResponse, DurationPoint, ExerciseRecord, ExerciseType, GoalProgress,
};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::BTreeMap;

pub fn build_dashboard(goal_minutes: u32, records: Vec<ExerciseRecord>) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), goal_minutes, records)
}

pub fn build_dashboard_at(
    today: NaiveDate,
    goal_minutes: u32,
    records: Vec<ExerciseRecord>,
) -> DashboardResponse {
    let weekly_minutes = weekly_duration_at(today, &records);

    DashboardResponse {
        today,
        progress: GoalProgress {
            goal_minutes,
            weekly_minutes,
            fraction: goal_progress(weekly_minutes, goal_minutes),
        },
        duration_by_date: duration_by_date(&records),
        calories_by_type: calories_by_type(&records),
        records,
    }
}

/// Minutes logged in the ISO week containing `today`.
pub fn weekly_duration_at(today: NaiveDate, records: &[ExerciseRecord]) -> u64 {
    let current = today.iso_week();
    records
        .iter()
        .filter(|record| record.date.iso_week() == current)
        .map(|record| u64::from(record.duration))
        .sum()
}

pub fn goal_progress(weekly_minutes: u64, goal_minutes: u32) -> f64 {
    if goal_minutes == 0 {
        return 0.0;
    }
    (weekly_minutes as f64 / f64::from(goal_minutes)).min(1.0)
}

pub fn duration_by_date(records: &[ExerciseRecord]) -> Vec<DurationPoint> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.date).or_default();
        *total = total.saturating_add(u64::from(record.duration));
    }

    totals
        .into_iter()
        .map(|(date, duration)| DurationPoint { date, duration })
        .collect()
}

pub fn calories_by_type(records: &[ExerciseRecord]) -> Vec<CaloriesPoint> {
    let mut totals: BTreeMap<ExerciseType, u64> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.exercise_type).or_default();
        *total = total.saturating_add(u64::from(record.calories));
    }

    totals
        .into_iter()
        .map(|(exercise_type, calories)| CaloriesPoint {
            exercise_type,
            label: exercise_type.label(),
            calories,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::calculate_calories;

    fn record(id: i64, date: NaiveDate, exercise_type: ExerciseType, duration: u32) -> ExerciseRecord {
        ExerciseRecord {
            id,
            date,
            exercise_type,
            duration,
            calories: calculate_calories(exercise_type, duration),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_duration_only_counts_current_iso_week() {
        // 2024-08-07 is a Wednesday in ISO week 32.
        let today = day(2024, 8, 7);
        assert_eq!(today.iso_week().week(), 32);
        let records = vec![
            record(1, day(2024, 8, 5), ExerciseType::Walking, 30),
            record(2, day(2024, 8, 7), ExerciseType::Running, 20),
            record(3, day(2024, 8, 11), ExerciseType::Soccer, 40),
            record(4, day(2024, 8, 4), ExerciseType::Gym, 30),
        ];
        assert_eq!(weekly_duration_at(today, &records), 90);
    }

    #[test]
    fn weekly_duration_ignores_same_week_number_in_other_year() {
        let today = day(2024, 8, 7);
        let records = vec![record(1, day(2023, 8, 9), ExerciseType::Tennis, 50)];
        assert_eq!(day(2023, 8, 9).iso_week().week(), 32);
        assert_eq!(weekly_duration_at(today, &records), 0);
    }

    #[test]
    fn goal_progress_is_clamped() {
        assert_eq!(goal_progress(0, 150), 0.0);
        assert_eq!(goal_progress(75, 150), 0.5);
        assert_eq!(goal_progress(300, 150), 1.0);
        assert_eq!(goal_progress(300, 0), 0.0);
        assert_eq!(goal_progress(0, 0), 0.0);
    }

    #[test]
    fn duration_grouped_by_date_in_order() {
        let records = vec![
            record(1, day(2024, 8, 6), ExerciseType::Walking, 30),
            record(2, day(2024, 8, 5), ExerciseType::Running, 20),
            record(3, day(2024, 8, 6), ExerciseType::Cycling, 15),
        ];
        let points = duration_by_date(&records);
        assert_eq!(
            points,
            vec![
                DurationPoint { date: day(2024, 8, 5), duration: 20 },
                DurationPoint { date: day(2024, 8, 6), duration: 45 },
            ]
        );
    }

    #[test]
    fn calories_grouped_by_type() {
        let records = vec![
            record(1, day(2024, 8, 5), ExerciseType::Soccer, 10),
            record(2, day(2024, 8, 6), ExerciseType::Walking, 30),
            record(3, day(2024, 8, 7), ExerciseType::Soccer, 20),
        ];
        let points = calories_by_type(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].exercise_type, ExerciseType::Walking);
        assert_eq!(points[0].calories, 120);
        assert_eq!(points[1].exercise_type, ExerciseType::Soccer);
        assert_eq!(points[1].calories, 330);
    }

    #[test]
    fn dashboard_on_empty_log() {
        let dashboard = build_dashboard_at(day(2024, 8, 7), 120, Vec::new());
        assert_eq!(dashboard.progress.weekly_minutes, 0);
        assert_eq!(dashboard.progress.fraction, 0.0);
        assert!(dashboard.duration_by_date.is_empty());
        assert!(dashboard.calories_by_type.is_empty());
    }
}
