//! Voice Script Builder - one voice-over record per scene

use crate::domain::entities::{Scene, VoiceScript};

const VOICES: [&str; 5] = [
    "friendly-narrator",
    "enthusiastic-child",
    "wise-mentor",
    "adventurous-hero",
    "cheerful-companion",
];

pub fn voice_scripts(scenes: &[Scene]) -> Vec<VoiceScript> {
    scenes
        .iter()
        .enumerate()
        .map(|(index, scene)| VoiceScript {
            scene_id: scene.scene_number,
            dialogue: scene.dialogue.clone(),
            emotion: scene.emotions.clone(),
            character_voice: VOICES[index % VOICES.len()].to_string(),
            timing: scene.duration,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(number: u32, duration: u32) -> Scene {
        Scene {
            scene_number: number,
            visual_description: String::new(),
            camera_angle: String::new(),
            lighting: String::new(),
            emotions: "Hope and resilience".to_string(),
            duration,
            dialogue: format!("line {}", number),
            action_beats: Vec::new(),
        }
    }

    #[test]
    fn test_voice_rotation_and_timing() {
        let scenes: Vec<Scene> = (1..=7).map(|n| scene(n, 14 + n)).collect();
        let scripts = voice_scripts(&scenes);

        assert_eq!(scripts.len(), 7);
        assert_eq!(scripts[0].character_voice, "friendly-narrator");
        assert_eq!(scripts[4].character_voice, "cheerful-companion");
        assert_eq!(scripts[5].character_voice, "friendly-narrator");
        assert_eq!(scripts[2].scene_id, 3);
        assert_eq!(scripts[2].timing, 17);
        assert_eq!(scripts[2].dialogue, "line 3");
        assert_eq!(scripts[2].emotion, "Hope and resilience");
    }
}
