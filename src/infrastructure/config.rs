//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::value_objects::GenerationMode;

/// Largest accepted `MAX_DURATION_MINUTES`; bounds per-request allocation
pub const DURATION_LIMIT_MINUTES: u32 = 600;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Template-only or model-assisted generation
    pub generation_mode: GenerationMode,

    /// Text-generation API base URL (OpenAI-compatible)
    pub llm_base_url: String,
    /// Model for authoring requests
    pub llm_model: String,
    /// Bearer token, for hosted endpoints
    pub llm_api_key: Option<String>,
    /// Per-request timeout for the text-generation service
    pub llm_timeout: Duration,

    /// Fixed seed for reproducible output; entropy when unset
    pub generation_seed: Option<u64>,
    /// Upper bound for the requested duration, in minutes
    pub max_duration_minutes: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let generation_mode = match lookup("GENERATION_MODE") {
            Some(mode) => mode
                .parse::<GenerationMode>()
                .map_err(anyhow::Error::msg)
                .context("GENERATION_MODE must be 'template' or 'assisted'")?,
            None => GenerationMode::default(),
        };

        let generation_seed = lookup("GENERATION_SEED")
            .map(|seed| seed.trim().parse::<u64>())
            .transpose()
            .context("GENERATION_SEED must be an unsigned integer")?;

        let max_duration_minutes: u32 = lookup("MAX_DURATION_MINUTES")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("MAX_DURATION_MINUTES must be a positive number")?;
        if !(1..=DURATION_LIMIT_MINUTES).contains(&max_duration_minutes) {
            anyhow::bail!(
                "MAX_DURATION_MINUTES must be between 1 and {}, got {}",
                DURATION_LIMIT_MINUTES,
                max_duration_minutes
            );
        }

        Ok(Self {
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            generation_mode,

            llm_base_url: lookup("LLM_BASE_URL")
                .unwrap_or_else(|| "http://localhost:11434/v1".to_string()),
            llm_model: lookup("LLM_MODEL").unwrap_or_else(|| "llama3.2".to_string()),
            llm_api_key: lookup("LLM_API_KEY").filter(|key| !key.trim().is_empty()),
            llm_timeout: Duration::from_secs(
                lookup("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "300".to_string())
                    .parse()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            ),

            generation_seed,
            max_duration_minutes,
        })
    }
}
