//! Domain layer containing the verification code entity.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
