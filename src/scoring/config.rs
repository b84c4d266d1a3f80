use std::path::PathBuf;

use crate::constants::ENCODER_FILE_NAME;

use super::error::ScoringError;

/// Configuration for [`RelevanceScorer::load`](super::RelevanceScorer::load).
///
/// The encoder vocabulary ships as a JSON sidecar next to the model file; by
/// default it is resolved as `encoder.json` in the model's directory.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Path to the ONNX model artifact.
    pub model_path: PathBuf,
    /// Path to the encoder vocabulary sidecar.
    pub encoder_path: PathBuf,
    /// If true, run the deterministic stub scorer (no artifact files required).
    pub testing_stub: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::new(),
            encoder_path: PathBuf::new(),
            testing_stub: false,
        }
    }
}

impl ScorerConfig {
    /// Creates a config for a model file, inferring the encoder sidecar from its
    /// directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        let model_path = model_path.into();
        let encoder_path = model_path
            .parent()
            .map(|p| p.join(ENCODER_FILE_NAME))
            .unwrap_or_default();

        Self {
            model_path,
            encoder_path,
            testing_stub: false,
        }
    }

    /// Creates a stub config (no artifact files; produces deterministic scores).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Overrides the encoder sidecar location.
    pub fn encoder_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.encoder_path = path.into();
        self
    }

    /// Validates required files for non-stub mode.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_path.as_os_str().is_empty() {
            return Err(ScoringError::InvalidConfig {
                reason: "model_path is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_path.exists() {
            return Err(ScoringError::ModelNotFound {
                path: self.model_path.clone(),
            });
        }

        if !self.encoder_path.exists() {
            return Err(ScoringError::EncoderNotFound {
                path: self.encoder_path.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the model file path exists.
    pub fn model_available(&self) -> bool {
        !self.model_path.as_os_str().is_empty() && self.model_path.exists()
    }
}
