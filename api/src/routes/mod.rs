//! Route handlers
//!
//! - Code verification (`POST /api/verify`)
//! - Health check (`GET /health`)

pub mod health;
pub mod verify;

pub use verify::AppState;
