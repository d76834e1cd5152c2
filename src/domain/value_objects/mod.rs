//! Value objects - Immutable objects defined by their attributes

mod generation_mode;
mod niche;
mod pipeline_stage;

pub use generation_mode::GenerationMode;
pub use niche::Niche;
pub use pipeline_stage::PipelineStage;
