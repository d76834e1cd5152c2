//! Assembly spec entity - rendering parameters for the final composite

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblySpec {
    pub resolution: String,
    pub fps: u32,
    pub codec: String,
    pub format: String,
    /// Sum of all scene durations in seconds
    pub total_duration: u32,
    pub layers: AssemblyLayers,
}

/// Track counts per layer of the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyLayers {
    pub video: usize,
    pub audio: usize,
    pub music: usize,
    pub effects: usize,
}
