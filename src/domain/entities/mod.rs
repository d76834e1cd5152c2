//! Domain entities - Immutable records produced once per generation request

mod assembly_spec;
mod generation;
mod metadata;
mod scene;
mod script;
mod sound_design;
mod strategy;
mod voice_script;

pub use assembly_spec::{AssemblyLayers, AssemblySpec};
pub use generation::{Production, VideoGenerationInput, VideoGenerationResult};
pub use metadata::{VideoMetadata, MAX_KEYWORDS, MAX_TAGS, MAX_TITLE_CHARS};
pub use scene::Scene;
pub use script::Script;
pub use sound_design::{SoundDesign, SoundEffect};
pub use strategy::Strategy;
pub use voice_script::VoiceScript;
