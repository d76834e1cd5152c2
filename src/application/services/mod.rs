//! Application services - Use case implementations
//!
//! The generation service runs one request through the pipeline, either
//! purely from templates or with stage drafts from the text-generation
//! service.

pub mod generation_service;
pub mod llm;
pub mod llm_service;

pub use generation_service::{GenerationError, GenerationService};
pub use llm_service::{LLMService, LLMServiceError};
