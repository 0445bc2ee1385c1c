//! Best-effort recording of started sets

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::services::{ExerciseStore, NewExerciseLog};

/// Submits one exercise log row per timer start without blocking the timer
#[derive(Clone)]
pub struct LogRecorder {
    store: Arc<dyn ExerciseStore>,
}

impl LogRecorder {
    pub fn new(store: Arc<dyn ExerciseStore>) -> Self {
        Self { store }
    }

    /// Spawn a detached insert of one log row.
    ///
    /// Failures are logged and dropped. The handle is only useful to callers
    /// that want to wait for the submission; the timer never does.
    pub fn record_start(
        &self,
        exercise_id: &str,
        user_id: &str,
        repetitions: u32,
        duration_seconds: u32,
    ) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let log = NewExerciseLog {
            user_id: user_id.to_string(),
            exercise_id: exercise_id.to_string(),
            repetitions,
            duration_seconds,
        };

        tokio::spawn(async move {
            match store.insert_exercise_log(log.clone()).await {
                Ok(()) => debug!(
                    "Logged {} reps / {}s for exercise {}",
                    log.repetitions, log.duration_seconds, log.exercise_id
                ),
                Err(e) => error!(
                    "Failed to log exercise {} for user {}: {}",
                    log.exercise_id, log.user_id, e
                ),
            }
        })
    }
}
