//! Configuration and CLI argument handling

use std::sync::Arc;

use clap::Parser;

use crate::{
    errors::TimerError,
    services::{ExerciseStore, MemoryStore, RestStore},
    state::{timer_config::{DEFAULT_DURATION_SECONDS, DEFAULT_REPETITIONS}, SessionContext, TimerConfig},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "rep-timer")]
#[command(about = "Exercise countdown timer with progress display and session logging")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the hosted table API. Without it an empty in-memory store is
    /// used, exercise details are never found and GET /exercise stays loading
    #[arg(long, env = "REP_TIMER_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Anonymous API key for the hosted table API
    #[arg(long, env = "REP_TIMER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Signed-in user the exercise logs belong to
    #[arg(short, long)]
    pub user_id: String,

    /// Exercise shown above the timer
    #[arg(short, long)]
    pub exercise_id: String,

    /// Initial countdown length in seconds (30, 60, 90, 120 or 180)
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECONDS)]
    pub duration: u32,

    /// Initial repetition target (5 to 30 in steps of 5)
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    pub reps: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn session(&self) -> SessionContext {
        SessionContext {
            user_id: self.user_id.clone(),
            exercise_id: self.exercise_id.clone(),
        }
    }

    /// Initial timer options, validated against the fixed option sets
    pub fn timer_config(&self) -> Result<TimerConfig, TimerError> {
        TimerConfig::new(self.duration, self.reps)
    }

    /// Storage collaborator selected by `--backend-url`
    pub fn store(&self) -> Arc<dyn ExerciseStore> {
        match &self.backend_url {
            Some(url) => Arc::new(RestStore::new(url.clone(), self.api_key.clone())),
            None => Arc::new(MemoryStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_minute_ten_reps() {
        let config = Config::try_parse_from(["rep-timer", "-u", "u1", "-e", "7"]).unwrap();
        assert_eq!(config.timer_config(), Ok(TimerConfig::default()));
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(
            config.session(),
            SessionContext {
                user_id: "u1".to_string(),
                exercise_id: "7".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn offline_store_has_no_exercise_details() {
        let config = Config::try_parse_from(["rep-timer", "-u", "u1", "-e", "7"]).unwrap();
        assert!(config.backend_url.is_none());

        let result = config.store().fetch_exercise_by_id("7").await;
        assert!(matches!(result, Err(crate::errors::StoreError::NotFound(id)) if id == "7"));
    }

    #[test]
    fn rejects_duration_outside_options() {
        let config =
            Config::try_parse_from(["rep-timer", "-u", "u1", "-e", "7", "--duration", "45"]).unwrap();
        assert_eq!(config.timer_config(), Err(TimerError::InvalidDuration(45)));
    }
}
