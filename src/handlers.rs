use crate::errors::AppError;
use crate::exercise::validate;
use crate::models::{
    DashboardResponse, ExerciseForm, ExerciseRecord, ExerciseType, ExerciseTypeInfo, GoalForm,
    GoalRequest, NewExercise,
};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::{render_index, Flash, FormDefaults};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let dashboard = load_dashboard(&state).await?;
    let form = FormDefaults::for_day(dashboard.today);
    Ok(Html(render_index(&dashboard, form, None)))
}

pub async fn submit_exercise(
    State(state): State<AppState>,
    Form(body): Form<ExerciseForm>,
) -> Result<Response, AppError> {
    let entry = body.into_new_exercise();
    let form = FormDefaults {
        exercise_type: entry.exercise_type,
        date: entry.date,
        duration: entry.duration,
    };

    let (status, flash) = match save_exercise(&state, &entry).await {
        Ok(record) => (
            StatusCode::OK,
            Flash::Success(format!(
                "Exercise saved. Calories burned: {} kcal",
                record.calories
            )),
        ),
        Err(err) if err.status.is_client_error() => {
            let rejected = AppError::unprocessable(err.message);
            (rejected.status, Flash::Error(rejected.message))
        }
        Err(err) => return Err(err),
    };

    let dashboard = load_dashboard(&state).await?;
    Ok((status, Html(render_index(&dashboard, form, Some(&flash)))).into_response())
}

pub async fn set_goal(
    State(state): State<AppState>,
    Form(payload): Form<GoalForm>,
) -> Redirect {
    update_goal(&state, payload.goal).await;
    Redirect::to("/")
}

pub async fn list_exercise_types() -> Json<Vec<ExerciseTypeInfo>> {
    Json(
        ExerciseType::ALL
            .into_iter()
            .map(|exercise_type| ExerciseTypeInfo {
                exercise_type,
                label: exercise_type.label(),
                calories_per_min: exercise_type.calories_per_min(),
            })
            .collect(),
    )
}

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExerciseRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(entry): Json<NewExercise>,
) -> Result<(StatusCode, Json<ExerciseRecord>), AppError> {
    let record = save_exercise(&state, &entry).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    Ok(Json(load_dashboard(&state).await?))
}

pub async fn get_goal(State(state): State<AppState>) -> Json<GoalRequest> {
    Json(GoalRequest {
        goal_minutes: state.goal().await,
    })
}

pub async fn put_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Json<GoalRequest> {
    update_goal(&state, payload.goal_minutes).await;
    Json(payload)
}

async fn save_exercise(state: &AppState, entry: &NewExercise) -> Result<ExerciseRecord, AppError> {
    let valid = match validate(entry) {
        Ok(valid) => valid,
        Err(err) => {
            warn!(duration = entry.duration, "rejected exercise entry: {}", err.message);
            return Err(err);
        }
    };

    let record = state.store.insert(&valid).await?;
    info!(
        id = record.id,
        exercise_type = %record.exercise_type,
        duration = record.duration,
        calories = record.calories,
        "saved exercise record"
    );
    Ok(record)
}

async fn update_goal(state: &AppState, goal_minutes: u32) {
    let mut goal = state.goal_minutes.lock().await;
    if *goal != goal_minutes {
        info!(goal_minutes, "weekly goal updated");
        *goal = goal_minutes;
    }
}

async fn load_dashboard(state: &AppState) -> Result<DashboardResponse, AppError> {
    let goal = state.goal().await;
    let records = state.store.list().await?;
    Ok(build_dashboard(goal, records))
}
