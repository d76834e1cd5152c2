//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::GenerationService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ollama::OllamaClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub llm_client: Arc<OllamaClient>,
    pub generation_service: GenerationService<OllamaClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        // Built even in template mode; no request is sent until a draft is needed
        let llm_client = Arc::new(OllamaClient::new(
            &config.llm_base_url,
            &config.llm_model,
            config.llm_api_key.clone(),
            config.llm_timeout,
        )
        .context("Failed to build text-generation HTTP client")?);

        let generation_service = GenerationService::new(
            llm_client.clone(),
            config.generation_mode,
            config.generation_seed,
        );

        Ok(Self {
            config,
            llm_client,
            generation_service,
        })
    }
}
