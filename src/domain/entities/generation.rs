//! Generation aggregate - input and complete output of one pipeline run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AssemblySpec, Scene, Script, SoundDesign, Strategy, VideoMetadata, VoiceScript,
};
use crate::domain::value_objects::Niche;

/// Validated input to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoGenerationInput {
    pub story_idea: String,
    pub niche: Niche,
    /// Target length in minutes
    pub duration: u32,
}

impl VideoGenerationInput {
    pub fn new(story_idea: impl Into<String>, niche: Niche, duration: u32) -> Self {
        Self {
            story_idea: story_idea.into(),
            niche,
            duration,
        }
    }
}

/// Output of stages 3-7, which only depend on the script
#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    pub scenes: Vec<Scene>,
    pub animation_prompts: Vec<String>,
    pub voice_scripts: Vec<VoiceScript>,
    pub sound_design: SoundDesign,
    pub assembly_spec: AssemblySpec,
}

/// Everything one generation request produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationResult {
    pub success: bool,
    pub algorithm_strategy: Strategy,
    pub script: Script,
    pub scenes: Vec<Scene>,
    pub animation_prompts: Vec<String>,
    pub voice_scripts: Vec<VoiceScript>,
    pub sound_design: SoundDesign,
    pub assembly_spec: AssemblySpec,
    pub metadata: VideoMetadata,
    pub generated_at: DateTime<Utc>,
}

impl VideoGenerationResult {
    pub fn assemble(
        strategy: Strategy,
        script: Script,
        production: Production,
        metadata: VideoMetadata,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            success: true,
            algorithm_strategy: strategy,
            script,
            scenes: production.scenes,
            animation_prompts: production.animation_prompts,
            voice_scripts: production.voice_scripts,
            sound_design: production.sound_design,
            assembly_spec: production.assembly_spec,
            metadata,
            generated_at,
        }
    }
}
