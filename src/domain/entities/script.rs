//! Script entity - three-act skeleton with dialogue and cliffhangers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub hook: String,
    pub act1: String,
    pub act2: String,
    pub act3: String,
    /// Number of scenes the Scene Director must produce
    pub total_scenes: u32,
    pub dialogue_lines: Vec<String>,
    pub cliffhangers: Vec<String>,
}

impl Script {
    /// Dialogue line for a zero-based scene index, cycling through the lines
    pub fn dialogue_for(&self, scene_index: usize) -> &str {
        if self.dialogue_lines.is_empty() {
            return "";
        }
        &self.dialogue_lines[scene_index % self.dialogue_lines.len()]
    }
}
