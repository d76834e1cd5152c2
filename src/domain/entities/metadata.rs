//! Video metadata entity - publishing fields for the hosting platform

use serde::{Deserialize, Serialize};

/// Longest title the platform displays without clipping
pub const MAX_TITLE_CHARS: usize = 60;
/// Tag limit applied to every generated tag list
pub const MAX_TAGS: usize = 15;
/// Keyword limit applied to every generated keyword list
pub const MAX_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail_prompt: String,
    pub category: String,
    pub target_keywords: Vec<String>,
}
