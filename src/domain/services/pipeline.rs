//! Pipeline composition - the eight stages run strictly in order

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::domain::entities::{Production, Script, VideoGenerationInput, VideoGenerationResult};
use crate::domain::services::{
    assembler, metadata_optimizer, scene_director, script_writer, sound_designer,
    strategy_analyzer, voice_director,
};
use crate::domain::value_objects::PipelineStage;

/// Run the full template pipeline
///
/// Random draws happen in a fixed order (hook, one duration per scene,
/// title template), so a seeded `rng` makes the output reproducible.
pub fn orchestrate<R: Rng + ?Sized>(
    input: &VideoGenerationInput,
    rng: &mut R,
    generated_at: DateTime<Utc>,
) -> VideoGenerationResult {
    debug!(stage = %PipelineStage::StrategyAnalysis, niche = %input.niche, "Running stage");
    let strategy = strategy_analyzer::analyze_strategy(input.niche, input.duration);

    debug!(stage = %PipelineStage::ScriptWriting, "Running stage");
    let script = script_writer::write_script(&input.story_idea, &strategy, input.duration, rng);

    let production = produce(&script, rng);

    debug!(stage = %PipelineStage::MetadataOptimization, "Running stage");
    let metadata =
        metadata_optimizer::optimize_metadata(&input.story_idea, input.niche, input.duration, rng);

    VideoGenerationResult::assemble(strategy, script, production, metadata, generated_at)
}

/// Stages 3-7: everything derived from the script alone
pub fn produce<R: Rng + ?Sized>(script: &Script, rng: &mut R) -> Production {
    debug!(stage = %PipelineStage::SceneDirection, total_scenes = script.total_scenes, "Running stage");
    let scenes = scene_director::direct_scenes(script, rng);

    debug!(stage = %PipelineStage::AnimationPrompts, "Running stage");
    let animation_prompts: Vec<String> = scenes.iter().map(scene_director::animation_prompt).collect();

    debug!(stage = %PipelineStage::VoiceScripts, "Running stage");
    let voice_scripts = voice_director::voice_scripts(&scenes);

    debug!(stage = %PipelineStage::SoundDesign, "Running stage");
    let sound_design = sound_designer::sound_design(&scenes);

    debug!(stage = %PipelineStage::Assembly, "Running stage");
    let assembly_spec = assembler::assembly_spec(&scenes, &voice_scripts, &sound_design);

    Production {
        scenes,
        animation_prompts,
        voice_scripts,
        sound_design,
        assembly_spec,
    }
}
