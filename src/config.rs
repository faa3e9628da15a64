//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup with `std::env::var`, after `.env` has
//! been loaded by `dotenvy`.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `GEMINI_API_KEY`: API key for the Gemini generative language API
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,locality_map=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 8000)
//! - `GEMINI_MODEL`: Model name (default: "gemini-2.0-flash")
//! - `GEMINI_BASE_URL`: API base URL (default: "https://generativelanguage.googleapis.com/v1beta")
//! - `UPSTREAM_TIMEOUT_SECS`: Deadline for one model call (default: 90)
//! - `DEFAULT_QUERY`: Area searched when `GET /map` has no `query` (default: "Andheri West")
//! - `DEFAULT_CITY`: City the search is restricted to (default: "Mumbai")
//! - `DEFAULT_LANGUAGE`: Language of the detail text (default: "English")
//! - `GEN_TEMPERATURE`: Sampling temperature (default: 0.2)
//! - `GEN_TOP_P`: Nucleus sampling threshold (default: 0.95)
//! - `GEN_TOP_K`: Top-k sampling threshold (default: 40)
//! - `GEN_MAX_OUTPUT_TOKENS`: Maximum reply length (default: 8192)

use crate::infrastructure::llm::gemini_client::GenerationSettings;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Gemini API key, sent as `x-goog-api-key`
    pub gemini_api_key: String,

    pub gemini_model: String,

    pub gemini_base_url: String,

    /// Upper bound for one streamed model call, in seconds
    pub upstream_timeout_secs: u64,

    pub default_query: String,

    pub default_city: String,

    pub default_language: String,

    pub temperature: f32,

    pub top_p: f32,

    pub top_k: u32,

    pub max_output_tokens: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is missing, or if any variable is
    /// set but cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = GenerationSettings::default();
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8000)?,
            gemini_api_key: env_required("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", "gemini-2.0-flash".to_string())?,
            gemini_base_url: env_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta".to_string(),
            )?,
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", 90)?,
            default_query: env_or("DEFAULT_QUERY", "Andheri West".to_string())?,
            default_city: env_or("DEFAULT_CITY", "Mumbai".to_string())?,
            default_language: env_or("DEFAULT_LANGUAGE", "English".to_string())?,
            temperature: env_or("GEN_TEMPERATURE", defaults.temperature)?,
            top_p: env_or("GEN_TOP_P", defaults.top_p)?,
            top_k: env_or("GEN_TOP_K", defaults.top_k)?,
            max_output_tokens: env_or("GEN_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
            ..GenerationSettings::default()
        }
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set or empty.
fn env_required(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(anyhow::anyhow!("Missing required environment variable: {}", key)),
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
