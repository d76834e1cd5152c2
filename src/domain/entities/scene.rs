//! Scene entity - one shot of the breakdown with its cinematic metadata

use serde::{Deserialize, Serialize};

/// A scene in the breakdown
///
/// `scene_number` is 1-based and always equals the scene's position in the
/// sequence produced by the Scene Director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_number: u32,
    pub visual_description: String,
    pub camera_angle: String,
    pub lighting: String,
    /// Emotion label the characters should display
    pub emotions: String,
    /// Length of the scene in seconds
    pub duration: u32,
    pub dialogue: String,
    pub action_beats: Vec<String>,
}
