//! Verification service module
//!
//! Judges a submitted code against the service rules:
//! - the code must be present and exactly six characters long
//! - the sixth character must not be the forbidden digit
//!
//! Nothing else is checked; in particular the first five characters are
//! never required to be digits.

mod config;
pub mod mock;
mod service;
mod traits;


pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::CodeVerifierTrait;
