//! One-shot fetch of the exercise shown above the timer

use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;

/// Fetch the session's exercise once. On failure the view stays loading.
pub async fn load_exercise_task(state: Arc<AppState>) {
    let exercise_id = state.session.exercise_id.clone();
    info!("Fetching details for exercise {}", exercise_id);

    match state.store().fetch_exercise_by_id(&exercise_id).await {
        Ok(exercise) => state.set_exercise(exercise),
        Err(e) => error!("Error fetching exercise details: {}", e),
    }
}
