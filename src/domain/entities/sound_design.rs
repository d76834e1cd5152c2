//! Sound design entity - music bed plus per-scene effects

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundDesign {
    pub background_music: String,
    pub sound_effects: Vec<SoundEffect>,
    pub music_volume: f32,
    pub effects_volume: f32,
}

/// Effects cue list for one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundEffect {
    pub scene_id: u32,
    pub effects: Vec<String>,
    pub timing: u32,
    pub volume: f32,
}
