//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP layer can
//! serialize/deserialize without depending on domain record layouts.

pub mod catalog;
pub mod generation;

pub use catalog::*;
pub use generation::*;
