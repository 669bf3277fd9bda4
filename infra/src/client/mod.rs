//! Verification service client
//!
//! Every response whose body parses as a verdict counts as an answer, so
//! a `400` carrying `{"success": false, ...}` is a rejection rather than a
//! transport fault. Connection errors, timeouts and bodies that are not a
//! verdict are transport faults.

mod http_client;

#[cfg(test)]
mod tests;

pub use http_client::HttpVerificationClient;
