//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A required environment variable was not set.
    ///
    /// Raised by [`validate`](super::Config::validate) when the model path is
    /// unset and stub scoring has not been opted into.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Candidate bound string could not be parsed as a number.
    #[error("failed to parse candidate bound '{value}' from {name}: {source}")]
    CandidateBoundParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Candidate bound must allow at least one article per request.
    #[error("invalid candidate bound '{value}': must be at least 1")]
    InvalidCandidateBound { value: usize },

    /// Boolean environment variable holds an unrecognized token.
    #[error("invalid boolean '{value}' for {name}: expected 1/0, true/false, yes/no or on/off")]
    InvalidBool { name: &'static str, value: String },
}
