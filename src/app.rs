use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/exercise", post(handlers::submit_exercise))
        .route("/goal", post(handlers::set_goal))
        .route("/api/exercise-types", get(handlers::list_exercise_types))
        .route("/api/records", get(handlers::list_records).post(handlers::create_record))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/goal", get(handlers::get_goal).put(handlers::put_goal))
        .with_state(state)
}
