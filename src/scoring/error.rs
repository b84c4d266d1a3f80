//! Scoring error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from artifact loading and relevance inference.
///
/// Artifact errors surface at startup and are fatal there; per-record errors are
/// recovered to a fallback score at the [`score_safe`](super::RelevanceScorer::score_safe)
/// boundary.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Scorer configuration is unusable before touching the filesystem.
    #[error("invalid scorer config: {reason}")]
    InvalidConfig { reason: String },

    /// Model artifact does not exist at the configured path.
    #[error("model artifact not found: {path}")]
    ModelNotFound { path: PathBuf },

    /// Model artifact exists but could not be loaded as an ONNX graph.
    #[error("failed to load model artifact: {reason}")]
    ModelLoadFailed { reason: String },

    /// Encoder vocabulary sidecar does not exist next to the model.
    #[error("encoder metadata not found: {path}")]
    EncoderNotFound { path: PathBuf },

    /// Encoder vocabulary sidecar could not be read.
    #[error("failed to read encoder metadata {path}: {source}")]
    EncoderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoder vocabulary sidecar is not valid JSON for the expected shape.
    #[error("failed to parse encoder metadata {path}: {source}")]
    EncoderParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoder vocabulary violates an invariant (empty or duplicated categories).
    #[error("invalid encoder metadata: {reason}")]
    InvalidEncoder { reason: String },

    /// Encoder output width disagrees with what the model expects.
    #[error("feature width mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Inference over an encoded batch failed inside the runtime.
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    /// The model produced NaN or an infinity for a record.
    #[error("model produced a non-finite score: {value}")]
    NonFiniteScore { value: f32 },
}
