//! Sound Design Builder - background music and per-scene effect cues

use crate::domain::entities::{Scene, SoundDesign, SoundEffect};

const BACKGROUND_MUSIC: &str = "upbeat-adventure-orchestral-loop";
const MUSIC_VOLUME: f32 = 0.6;
const EFFECTS_VOLUME: f32 = 0.7;
const CUE_VOLUME: f32 = 0.7;

const BASELINE_EFFECTS: [&str; 2] = ["ambient-atmosphere", "footsteps-movement"];

/// Emotion keyword and the pair of effects it adds
///
/// Matching is a case-sensitive substring test on `Scene::emotions`. The
/// Scene Director's labels are capitalized ("Excitement and anticipation",
/// "Joy and triumph"), so none of these fire for template-directed scenes.
const EMOTION_CUES: [(&str, [&str; 2]); 3] = [
    ("excitement", ["excitement-whoosh", "positive-chime"]),
    ("tension", ["tension-build", "suspense-drone"]),
    ("joy", ["celebration-sparkle", "happy-bells"]),
];

pub fn sound_design(scenes: &[Scene]) -> SoundDesign {
    SoundDesign {
        background_music: BACKGROUND_MUSIC.to_string(),
        sound_effects: scenes
            .iter()
            .map(|scene| SoundEffect {
                scene_id: scene.scene_number,
                effects: effects_for(&scene.emotions),
                timing: scene.duration,
                volume: CUE_VOLUME,
            })
            .collect(),
        music_volume: MUSIC_VOLUME,
        effects_volume: EFFECTS_VOLUME,
    }
}

pub fn effects_for(emotions: &str) -> Vec<String> {
    let mut effects: Vec<String> = BASELINE_EFFECTS.iter().map(|e| e.to_string()).collect();

    for (keyword, cues) in EMOTION_CUES {
        if emotions.contains(keyword) {
            effects.extend(cues.iter().map(|e| e.to_string()));
        }
    }

    effects
}
