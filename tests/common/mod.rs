//! Shared helpers for the HTTP integration tests.

pub mod harness;
pub mod http_client;
