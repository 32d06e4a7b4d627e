//! Process-wide configuration.
//!
//! Everything the generator components need from the environment is read
//! once at startup into an explicit [`AppConfig`], so components never
//! reach into `std::env` themselves and tests can construct configs
//! directly.

use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini model.
pub const MODEL_VAR: &str = "GEMINI_MODEL";

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set; export it or add it to a .env file")]
    MissingApiKey,
}

/// Startup configuration for the generation service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// The API key is required; the model falls back to [`DEFAULT_MODEL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}
