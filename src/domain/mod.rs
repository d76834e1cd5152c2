//! Domain layer - Core pipeline logic with no I/O
//!
//! This layer contains:
//! - Entities: Strategy, Script, Scene, and the other per-request records
//! - Value Objects: Niche, PipelineStage
//! - Domain Services: the pure stage functions and their composition

pub mod entities;
pub mod services;
pub mod value_objects;
