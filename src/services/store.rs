//! Storage collaborator interface and row types

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::StoreError;

/// Row of the `exercises` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "reps")]
    pub recommended_reps: Option<u32>,
}

/// Table ids arrive as integers or strings depending on the column type
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Insert payload for the `exercise_logs` table; `created_at` is filled in by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExerciseLog {
    pub user_id: String,
    pub exercise_id: String,
    pub repetitions: u32,
    pub duration_seconds: u32,
}

/// Remote table access used by the timer widget
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn fetch_exercise_by_id(&self, id: &str) -> Result<Exercise, StoreError>;

    async fn insert_exercise_log(&self, log: NewExerciseLog) -> Result<(), StoreError>;
}
