//! Pipeline stages - the eight agents in execution order

use serde::{Deserialize, Serialize};

/// One step of the generation pipeline
///
/// `display_duration_ms` is the fixed time the front-end progress bar spends
/// on the step. It is cosmetic and unrelated to how long the stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    StrategyAnalysis,
    ScriptWriting,
    SceneDirection,
    AnimationPrompts,
    VoiceScripts,
    SoundDesign,
    Assembly,
    MetadataOptimization,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 8] = [
        PipelineStage::StrategyAnalysis,
        PipelineStage::ScriptWriting,
        PipelineStage::SceneDirection,
        PipelineStage::AnimationPrompts,
        PipelineStage::VoiceScripts,
        PipelineStage::SoundDesign,
        PipelineStage::Assembly,
        PipelineStage::MetadataOptimization,
    ];

    /// 1-based position in the pipeline
    pub fn step(&self) -> u8 {
        match self {
            Self::StrategyAnalysis => 1,
            Self::ScriptWriting => 2,
            Self::SceneDirection => 3,
            Self::AnimationPrompts => 4,
            Self::VoiceScripts => 5,
            Self::SoundDesign => 6,
            Self::Assembly => 7,
            Self::MetadataOptimization => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::StrategyAnalysis => "Algorithm Analysis",
            Self::ScriptWriting => "Script Writing",
            Self::SceneDirection => "Scene Direction",
            Self::AnimationPrompts => "Animation Generation",
            Self::VoiceScripts => "Voice Acting",
            Self::SoundDesign => "Sound Design",
            Self::Assembly => "Video Assembly",
            Self::MetadataOptimization => "Platform Optimization",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StrategyAnalysis => "Analyzing platform algorithm & viral patterns",
            Self::ScriptWriting => "Creating viral screenplay with hooks",
            Self::SceneDirection => "Breaking down into cinematic scenes",
            Self::AnimationPrompts => "Generating animation prompts for every scene",
            Self::VoiceScripts => "Creating character voices with emotion",
            Self::SoundDesign => "Adding SFX & royalty-free music",
            Self::Assembly => "Building the 1080p assembly specification",
            Self::MetadataOptimization => "Generating title, description, tags & thumbnail",
        }
    }

    pub fn display_duration_ms(&self) -> u64 {
        match self {
            Self::StrategyAnalysis => 3000,
            Self::ScriptWriting => 5000,
            Self::SceneDirection => 3000,
            Self::AnimationPrompts => 8000,
            Self::VoiceScripts => 4000,
            Self::SoundDesign => 3000,
            Self::Assembly => 6000,
            Self::MetadataOptimization => 3000,
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/8 {}", self.step(), self.name())
    }
}
