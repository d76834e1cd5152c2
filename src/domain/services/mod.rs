//! Domain services - Pure stage functions of the generation pipeline
//!
//! Each stage is a free function over immutable inputs. Stages that draw
//! random values take an explicit `rand::Rng` so callers control seeding.

pub mod assembler;
pub mod metadata_optimizer;
pub mod pipeline;
pub mod scene_director;
pub mod script_writer;
pub mod sound_designer;
pub mod strategy_analyzer;
pub mod voice_director;

pub use pipeline::{orchestrate, produce};
