//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;

pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse};
