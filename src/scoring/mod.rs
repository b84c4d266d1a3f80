//! Relevance scoring: one-hot feature encoding plus the ONNX regressor.
//!
//! The scorer is constructed once at startup from a model artifact and its
//! `encoder.json` vocabulary sidecar, then shared behind an `Arc` by every
//! request. Per-record failures are recovered to a fallback score at the
//! boundary; artifact problems are fatal at load time.

pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod scorer;
pub mod types;


pub use config::ScorerConfig;
pub use encoder::{EncoderVocabulary, OneHotEncoder};
pub use error::ScoringError;
pub use model::{ModelMode, OnnxPlan, RelevanceModel};
pub use scorer::RelevanceScorer;
pub use types::ScoreOutcome;
