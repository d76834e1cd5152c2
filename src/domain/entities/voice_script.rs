//! Voice script entity - voice-over direction for one scene

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceScript {
    /// The `scene_number` this line belongs to
    pub scene_id: u32,
    pub dialogue: String,
    pub emotion: String,
    pub character_voice: String,
    /// Seconds available for the line (the scene duration)
    pub timing: u32,
}
