//! Connection configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;

/// Default connection string for a local `mongod`.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
/// Database holding the `taxi` and `listing` collections.
pub const DEFAULT_DATABASE: &str = "test";

/// Store connection settings, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MongoDB connection string (host, port, credentials, driver options)
    pub mongodb_uri: String,
    /// Database name
    pub database: String,
}

impl Default for Config {
    /// Local development settings.
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MONGODB_URI` and `MONGODB_DATABASE` fall back to the local defaults
    /// when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let mongodb_uri = env::var("MONGODB_URI")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        let database = env::var("MONGODB_DATABASE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Self::new(mongodb_uri, database)
    }

    /// Build a configuration, rejecting blank values.
    pub fn new(
        mongodb_uri: impl Into<String>,
        database: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mongodb_uri = mongodb_uri.into();
        let database = database.into();

        if mongodb_uri.is_empty() {
            return Err(ConfigError::Invalid("MONGODB_URI", "must not be empty"));
        }
        if database.is_empty() {
            return Err(ConfigError::Invalid("MONGODB_DATABASE", "must not be empty"));
        }

        Ok(Self {
            mongodb_uri,
            database,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
