//! Catalog DTOs - niches and pipeline stages for the front-end

use serde::Serialize;

use crate::domain::value_objects::{Niche, PipelineStage};

/// Durations (minutes) offered by the input form
pub const SUGGESTED_DURATIONS: [u32; 4] = [5, 10, 15, 20];

pub const EXAMPLE_IDEAS: [&str; 4] = [
    "A brave superhero saves children from a burning building",
    "Magical animals teach kids about friendship and kindness",
    "Time-traveling students learn about ancient civilizations",
    "Robot detective solves mysteries in a futuristic city",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheDto {
    pub slug: String,
    pub label: String,
    pub category: String,
    pub target_audience: String,
}

impl From<Niche> for NicheDto {
    fn from(niche: Niche) -> Self {
        Self {
            slug: niche.slug().to_string(),
            label: niche.label().to_string(),
            category: niche.category().to_string(),
            target_audience: niche.target_audience().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheCatalogDto {
    pub niches: Vec<NicheDto>,
    pub default_niche: String,
    pub suggested_durations: Vec<u32>,
    pub example_ideas: Vec<String>,
}

impl NicheCatalogDto {
    pub fn build() -> Self {
        Self {
            niches: Niche::ALL.into_iter().map(NicheDto::from).collect(),
            default_niche: Niche::DEFAULT.slug().to_string(),
            suggested_durations: SUGGESTED_DURATIONS.to_vec(),
            example_ideas: EXAMPLE_IDEAS.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// A pipeline step with its cosmetic progress-bar duration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStageDto {
    pub step: u8,
    pub id: PipelineStage,
    pub name: String,
    pub description: String,
    pub display_duration_ms: u64,
}

impl From<PipelineStage> for PipelineStageDto {
    fn from(stage: PipelineStage) -> Self {
        Self {
            step: stage.step(),
            id: stage,
            name: stage.name().to_string(),
            description: stage.description().to_string(),
            display_duration_ms: stage.display_duration_ms(),
        }
    }
}

pub fn pipeline_stages() -> Vec<PipelineStageDto> {
    PipelineStage::ALL.into_iter().map(PipelineStageDto::from).collect()
}
