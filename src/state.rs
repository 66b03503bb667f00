use crate::storage::ExerciseStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: ExerciseStore,
    pub goal_minutes: Arc<Mutex<u32>>,
}

impl AppState {
    pub fn new(store: ExerciseStore, goal_minutes: u32) -> Self {
        Self {
            store,
            goal_minutes: Arc::new(Mutex::new(goal_minutes)),
        }
    }

    pub async fn goal(&self) -> u32 {
        *self.goal_minutes.lock().await
    }
}
