//! In-process store used when no backend URL is configured

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::store::{Exercise, ExerciseStore, NewExerciseLog};
use crate::errors::StoreError;

/// Stored log row with its insertion time
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLogRow {
    pub log: NewExerciseLog,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    exercises: Mutex<HashMap<String, Exercise>>,
    logs: Mutex<Vec<ExerciseLogRow>>,
    fail_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given exercises
    pub fn with_exercises(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        let store = Self::new();
        for exercise in exercises {
            store.put_exercise(exercise);
        }
        store
    }

    pub fn put_exercise(&self, exercise: Exercise) {
        if let Ok(mut exercises) = self.exercises.lock() {
            exercises.insert(exercise.id.clone(), exercise);
        }
    }

    /// Make every subsequent log insert fail, simulating an unreachable backend
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all inserted log rows in insertion order
    pub fn logs(&self) -> Vec<ExerciseLogRow> {
        self.logs.lock().map(|logs| logs.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn fetch_exercise_by_id(&self, id: &str) -> Result<Exercise, StoreError> {
        let exercises = self
            .exercises
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Failed to lock exercises: {}", e)))?;

        exercises
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert_exercise_log(&self, log: NewExerciseLog) -> Result<(), StoreError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("inserts disabled".to_string()));
        }

        let mut logs = self
            .logs
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Failed to lock logs: {}", e)))?;

        debug!("Stored exercise log #{}: {:?}", logs.len() + 1, log);
        logs.push(ExerciseLogRow {
            log,
            created_at: Utc::now(),
        });
        Ok(())
    }
}
