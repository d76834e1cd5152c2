//! Generation request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::GenerationError;
use crate::domain::entities::{
    AssemblySpec, Script, VideoGenerationInput, VideoGenerationResult, VideoMetadata,
};
use crate::domain::value_objects::Niche;

/// Number of animation prompts echoed back in the summary response
pub const SAMPLE_PROMPT_COUNT: usize = 3;

/// Raw generation request as posted by the form
///
/// Every field is optional at the wire level so that missing values are
/// reported through [`GenerateVideoRequestDto::validate`] instead of a
/// deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequestDto {
    #[serde(default)]
    pub story_idea: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

impl GenerateVideoRequestDto {
    /// Check the request and resolve it into pipeline input
    ///
    /// Unknown or missing niches resolve to the default niche; a blank story
    /// idea or a duration outside `1..=max_duration` is rejected.
    pub fn validate(self, max_duration: u32) -> Result<VideoGenerationInput, GenerationError> {
        let story_idea = self
            .story_idea
            .map(|idea| idea.trim().to_string())
            .filter(|idea| !idea.is_empty())
            .ok_or_else(|| {
                GenerationError::InvalidRequest("Please enter a story idea".to_string())
            })?;

        let duration = self.duration.ok_or_else(|| {
            GenerationError::InvalidRequest("duration (minutes) is required".to_string())
        })?;
        if duration < 1 || duration > i64::from(max_duration) {
            return Err(GenerationError::InvalidRequest(format!(
                "duration must be between 1 and {} minutes, got {}",
                max_duration, duration
            )));
        }

        let niche = self
            .niche
            .as_deref()
            .map(Niche::parse_or_default)
            .unwrap_or_default();

        Ok(VideoGenerationInput::new(story_idea, niche, duration as u32))
    }
}

/// Summary of the produced video
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSpecDto {
    pub script: Script,
    /// Number of scenes
    pub scenes: usize,
    /// Seconds, summed over scenes
    pub duration: u32,
    pub resolution: String,
}

/// Success response of `POST /api/generate-video`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponseDto {
    pub success: bool,
    pub metadata: VideoMetadata,
    pub video_spec: VideoSpecDto,
    pub animation_prompts: Vec<String>,
    pub assembly_spec: AssemblySpec,
    pub generated_at: DateTime<Utc>,
}

impl From<VideoGenerationResult> for GenerateVideoResponseDto {
    fn from(result: VideoGenerationResult) -> Self {
        let video_spec = VideoSpecDto {
            scenes: result.scenes.len(),
            duration: result.assembly_spec.total_duration,
            resolution: result.assembly_spec.resolution.clone(),
            script: result.script,
        };

        Self {
            success: result.success,
            metadata: result.metadata,
            video_spec,
            animation_prompts: result
                .animation_prompts
                .into_iter()
                .take(SAMPLE_PROMPT_COUNT)
                .collect(),
            assembly_spec: result.assembly_spec,
            generated_at: result.generated_at,
        }
    }
}

/// Failure body for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
}

impl ErrorResponseDto {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
