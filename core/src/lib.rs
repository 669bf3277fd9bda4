//! # VerifyCode Core
//!
//! Core business logic for the VerifyCode workspace.
//! This crate contains the verification code entity, the verification
//! service that judges submitted codes, the state of the six-cell code
//! entry form, and the error types shared by all of them.

pub mod domain;
pub mod errors;
pub mod form;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use form::{CodeEntryForm, SubmitOutcome, VerificationClientTrait};
pub use services::*;
