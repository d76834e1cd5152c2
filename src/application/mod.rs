//! Application layer - Use cases, ports, and DTOs
//!
//! Services here compose the pure domain pipeline with the outbound ports
//! (the remote text-generation service) and expose DTOs for the HTTP layer.

pub mod dto;
pub mod ports;
pub mod services;
