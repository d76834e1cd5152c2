//! Strategy entity - viral/algorithm plan for a single video

use serde::{Deserialize, Serialize};

/// Pacing plan derived from the niche and the target duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// How the opening seconds should hook the viewer
    pub hook_strategy: String,
    /// Offsets (seconds) where a retention beat should land
    pub retention_points: Vec<u32>,
    /// Emotional beat labels, in order
    pub emotion_pacing: Vec<String>,
    /// Ad break offsets (seconds); always starts with the pre-roll at 0
    pub ad_placements: Vec<u32>,
    pub target_audience: String,
    pub viral_factors: Vec<String>,
}
