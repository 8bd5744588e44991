//! Loader configuration loaded from environment variables.
//!
//! Built once at process start and passed by reference into the loader;
//! no process-wide mutable state.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DEADLINE_MINUTES: u64 = 30;

/// Loader configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database server host
    pub db_host: String,
    /// Database server port
    pub db_port: u16,
    /// Database user
    pub db_user: String,
    /// Database password
    pub db_password: String,
    /// Database name (created if absent)
    pub db_name: String,
    /// Path to the Strava export JSON document
    pub input_json: PathBuf,
    /// Wall-clock deadline for the whole load
    pub deadline: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            db_host: "127.0.0.1".to_string(),
            db_port: 3306,
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "strava".to_string(),
            input_json: PathBuf::from("strava.json"),
            deadline: Duration::from_secs(60 * DEFAULT_DEADLINE_MINUTES),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DB_USER`, `DB_PASSWORD` and `INPUT_JSON` are required; everything
    /// else falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "3306".to_string())
                .parse()
                .unwrap_or(3306),
            db_user: env::var("DB_USER").map_err(|_| ConfigError::Missing("DB_USER"))?,
            db_password: env::var("DB_PASSWORD")
                .map_err(|_| ConfigError::Missing("DB_PASSWORD"))?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "strava".to_string()),
            input_json: env::var("INPUT_JSON")
                .map(PathBuf::from)
                .map_err(|_| ConfigError::Missing("INPUT_JSON"))?,
            deadline: Duration::from_secs(
                60 * env::var("LOAD_DEADLINE_MINUTES")
                    .unwrap_or_else(|_| DEFAULT_DEADLINE_MINUTES.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_DEADLINE_MINUTES),
            ),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
