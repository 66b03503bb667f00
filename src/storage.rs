use crate::errors::AppError;
use crate::exercise::ValidExercise;
use crate::models::{ExerciseRecord, ExerciseType};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::{path::Path, str::FromStr};
use tracing::info;

pub const MEMORY_PATH: &str = ":memory:";

/// Append-only store for the `exercise` table.
#[derive(Clone)]
pub struct ExerciseStore {
    pool: SqlitePool,
}

impl ExerciseStore {
    pub async fn connect(path: &Path) -> Result<Self, AppError> {
        let pool = if path.as_os_str() == MEMORY_PATH {
            info!("opening in-memory exercise store");
            // Every in-memory connection is its own database, so keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            info!("opening exercise store at {}", path.display());
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            SqlitePoolOptions::new()
                .max_connections(4)
                .connect_with(
                    SqliteConnectOptions::new()
                        .filename(path)
                        .create_if_missing(true),
                )
                .await?
        };

        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn initialize_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exercise (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                exercise_type TEXT NOT NULL,
                duration INTEGER NOT NULL,
                calories INTEGER NOT NULL
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercise_date ON exercise(date)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn insert(&self, entry: &ValidExercise) -> Result<ExerciseRecord, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO exercise (date, exercise_type, duration, calories)
            VALUES (?1, ?2, ?3, ?4)
        "#,
        )
        .bind(entry.date)
        .bind(entry.exercise_type.slug())
        .bind(i64::from(entry.duration))
        .bind(i64::from(entry.calories))
        .execute(&self.pool)
        .await?;

        Ok(ExerciseRecord {
            id: result.last_insert_rowid(),
            date: entry.date,
            exercise_type: entry.exercise_type,
            duration: entry.duration,
            calories: entry.calories,
        })
    }

    pub async fn list(&self) -> Result<Vec<ExerciseRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, date, exercise_type, duration, calories FROM exercise ORDER BY date, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: &SqliteRow) -> Result<ExerciseRecord, AppError> {
    let date: NaiveDate = row.try_get("date")?;
    let exercise_type: String = row.try_get("exercise_type")?;
    let duration: i64 = row.try_get("duration")?;
    let calories: i64 = row.try_get("calories")?;

    Ok(ExerciseRecord {
        id: row.try_get("id")?,
        date,
        exercise_type: ExerciseType::from_str(&exercise_type).map_err(AppError::internal)?,
        duration: u32::try_from(duration).map_err(AppError::internal)?,
        calories: u32::try_from(calories).map_err(AppError::internal)?,
    })
}
