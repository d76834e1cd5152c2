//! Assembly Spec Builder - layer counts and runtime for the composite

use crate::domain::entities::{AssemblyLayers, AssemblySpec, Scene, SoundDesign, VoiceScript};

const RESOLUTION: &str = "1920x1080";
const FPS: u32 = 30;
const CODEC: &str = "h264";
const FORMAT: &str = "mp4";

pub fn assembly_spec(
    scenes: &[Scene],
    voice_scripts: &[VoiceScript],
    sound_design: &SoundDesign,
) -> AssemblySpec {
    AssemblySpec {
        resolution: RESOLUTION.to_string(),
        fps: FPS,
        codec: CODEC.to_string(),
        format: FORMAT.to_string(),
        total_duration: scenes.iter().map(|scene| scene.duration).sum(),
        layers: AssemblyLayers {
            video: scenes.len(),
            audio: voice_scripts.len(),
            music: 1,
            effects: sound_design.sound_effects.len(),
        },
    }
}
