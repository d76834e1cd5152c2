//! Generation Service - runs one video request through the pipeline

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::LlmPort;
use crate::application::services::{LLMService, LLMServiceError};
use crate::domain::entities::{VideoGenerationInput, VideoGenerationResult};
use crate::domain::services::{orchestrate, produce};
use crate::domain::value_objects::{GenerationMode, PipelineStage};

/// Errors surfaced to the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The request was missing a field or out of range
    #[error("{0}")]
    InvalidRequest(String),
    /// The text-generation service failed or replied with something unusable
    #[error(transparent)]
    Authoring(#[from] LLMServiceError),
    /// The pipeline itself failed to run to completion
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Produces a complete [`VideoGenerationResult`] per request
pub struct GenerationService<L: LlmPort> {
    llm_service: LLMService<L>,
    mode: GenerationMode,
    seed: Option<u64>,
}

impl<L: LlmPort> GenerationService<L> {
    pub fn new(llm: Arc<L>, mode: GenerationMode, seed: Option<u64>) -> Self {
        Self {
            llm_service: LLMService::new(llm),
            mode,
            seed,
        }
    }

    /// Fresh generator per request; a configured seed makes runs repeatable
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    #[instrument(skip(self, input), fields(niche = %input.niche, duration = input.duration, mode = %self.mode))]
    pub async fn generate(
        &self,
        input: &VideoGenerationInput,
    ) -> Result<VideoGenerationResult, GenerationError> {
        info!("Starting video generation");
        let mut rng = self.rng();

        let result = match self.mode {
            GenerationMode::Template => {
                // CPU-bound; runs on the blocking pool
                let input = input.clone();
                tokio::task::spawn_blocking(move || orchestrate(&input, &mut rng, Utc::now()))
                    .await
                    .map_err(|e| GenerationError::Internal(format!("Pipeline task failed: {}", e)))?
            }
            GenerationMode::Assisted => self.generate_assisted(input, &mut rng).await?,
        };

        info!(
            scenes = result.scenes.len(),
            total_duration = result.assembly_spec.total_duration,
            "Video generation complete"
        );
        Ok(result)
    }

    /// Strategy, script, and metadata come from the model; stages 3-7 stay local
    async fn generate_assisted(
        &self,
        input: &VideoGenerationInput,
        rng: &mut StdRng,
    ) -> Result<VideoGenerationResult, GenerationError> {
        debug!(stage = %PipelineStage::StrategyAnalysis, "Drafting stage remotely");
        let strategy = self
            .llm_service
            .draft_strategy(input.niche, input.duration)
            .await?;

        debug!(stage = %PipelineStage::ScriptWriting, "Drafting stage remotely");
        let script = self
            .llm_service
            .draft_script(&input.story_idea, &strategy, input.duration)
            .await?;

        let production = produce(&script, rng);

        debug!(stage = %PipelineStage::MetadataOptimization, "Drafting stage remotely");
        let metadata = self
            .llm_service
            .draft_metadata(&input.story_idea, &script, input.niche)
            .await?;

        Ok(VideoGenerationResult::assemble(
            strategy,
            script,
            production,
            metadata,
            Utc::now(),
        ))
    }
}
