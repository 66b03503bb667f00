pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod exercise;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::ExerciseStore;
