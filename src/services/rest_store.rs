//! Hosted table API client (PostgREST conventions)

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::debug;

use super::store::{Exercise, ExerciseStore, NewExerciseLog};
use crate::errors::StoreError;

/// Accept header asking the backend for exactly one row as a bare object
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }
}

async fn backend_error(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    StoreError::Backend { status, message }
}

#[async_trait]
impl ExerciseStore for RestStore {
    async fn fetch_exercise_by_id(&self, id: &str) -> Result<Exercise, StoreError> {
        debug!("Fetching exercise {}", id);

        let request = self
            .client
            .get(self.table_url("exercises"))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))])
            .header(header::ACCEPT, SINGLE_OBJECT);

        let response = self.authorized(request).send().await?;

        // A single-object request for zero rows is answered with 406.
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(response.json::<Exercise>().await?)
    }

    async fn insert_exercise_log(&self, log: NewExerciseLog) -> Result<(), StoreError> {
        debug!("Inserting exercise log for exercise {}", log.exercise_id);

        let request = self
            .client
            .post(self.table_url("exercise_logs"))
            .header("Prefer", "return=minimal")
            .json(&[log]);

        let response = self.authorized(request).send().await?;
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(())
    }
}
