//! Type definitions shared between the server and its clients
//!
//! - `response` - Verification request/response bodies and health checks

pub mod response;

pub use response::{HealthResponse, HealthStatus, VerifyRequest, VerifyResponse};
