//! Catalog API routes
//!
//! Static data the front-end needs to render the form and progress bar.

use axum::Json;

use crate::application::dto::{pipeline_stages, NicheCatalogDto, PipelineStageDto};

/// List the eight pipeline stages in order
pub async fn list_pipeline_stages() -> Json<Vec<PipelineStageDto>> {
    Json(pipeline_stages())
}

/// List the supported niches with suggested durations and example ideas
pub async fn list_niches() -> Json<NicheCatalogDto> {
    Json(NicheCatalogDto::build())
}
