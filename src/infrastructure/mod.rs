//! Infrastructure layer - HTTP surface, configuration, and the
//! text-generation client

pub mod config;
pub mod http;
pub mod ollama;
pub mod state;
