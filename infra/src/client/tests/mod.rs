//! Unit tests for the HTTP verification client

#[cfg(test)]
pub mod http_client_tests;
