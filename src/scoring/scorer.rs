use std::sync::Arc;

use tracing::warn;

use crate::features::FeatureRecord;

use super::config::ScorerConfig;
use super::encoder::{EncoderVocabulary, OneHotEncoder};
use super::error::ScoringError;
use super::model::{ModelMode, RelevanceModel};
use super::types::ScoreOutcome;

/// Encoder plus model, loaded once at startup and shared read-only.
///
/// Cloning is cheap: the model sits behind an `Arc`, the encoder is a small
/// vocabulary table. All scoring entry points take `&self`, so one scorer can
/// serve concurrent requests.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    encoder: OneHotEncoder,
    model: Arc<RelevanceModel>,
}

impl RelevanceScorer {
    /// Builds a scorer from parts, checking that the encoder produces rows of
    /// the width the model expects.
    pub fn new(encoder: OneHotEncoder, model: Arc<RelevanceModel>) -> Result<Self, ScoringError> {
        if encoder.feature_len() != model.feature_len() {
            return Err(ScoringError::ShapeMismatch {
                expected: model.feature_len(),
                actual: encoder.feature_len(),
            });
        }
        Ok(Self { encoder, model })
    }

    /// Loads the artifact pair described by `config`.
    ///
    /// A missing or unreadable artifact is an error here, which callers treat
    /// as fatal at startup. The stub path is an explicit opt-in and never a
    /// silent fallback.
    pub fn load(config: &ScorerConfig) -> Result<Self, ScoringError> {
        config.validate()?;

        if config.testing_stub {
            warn!("relevance model stubbed; scores come from the built-in formula");
            return Ok(Self::stub());
        }

        let vocabulary = EncoderVocabulary::from_json_file(&config.encoder_path)?;
        vocabulary.validate()?;
        let encoder = OneHotEncoder::new(vocabulary);
        let model = RelevanceModel::load(&config.model_path, encoder.feature_len())?;

        Self::new(encoder, Arc::new(model))
    }

    /// Deterministic scorer over the compiled-in vocabulary.
    pub fn stub() -> Self {
        let encoder = OneHotEncoder::builtin();
        let model = RelevanceModel::stub(encoder.feature_len());
        Self {
            encoder,
            model: Arc::new(model),
        }
    }

    /// Scorer whose every prediction fails, for exercising fallback paths.
    #[cfg(any(test, feature = "mock"))]
    pub fn failing_stub() -> Self {
        let encoder = OneHotEncoder::builtin();
        // Width disagreement makes predict return ShapeMismatch for any row.
        let model = RelevanceModel::stub(1);
        Self {
            encoder,
            model: Arc::new(model),
        }
    }

    pub fn feature_len(&self) -> usize {
        self.encoder.feature_len()
    }

    pub fn mode(&self) -> ModelMode {
        self.model.mode()
    }

    pub fn is_stub(&self) -> bool {
        self.model.is_stub()
    }

    /// Scores one record. Unknown categories encode as zero blocks and still
    /// produce a score; only model failures and non-finite outputs error.
    pub fn score(&self, record: &FeatureRecord) -> Result<f32, ScoringError> {
        let features = self.encoder.encode_batch(std::slice::from_ref(record))?;
        let scores = self.model.predict(&features)?;
        ensure_finite(scores[0])
    }

    /// Scores one record, keeping the failure detail instead of erroring.
    pub fn score_checked(&self, record: &FeatureRecord) -> ScoreOutcome {
        match self.score(record) {
            Ok(score) => ScoreOutcome::success(score),
            Err(e) => ScoreOutcome::fallback(e.to_string()),
        }
    }

    /// Boundary form of [`score_checked`](Self::score_checked): never fails,
    /// logging the failure against `article_id` and returning the fallback
    /// score instead.
    pub fn score_safe(&self, article_id: i64, record: &FeatureRecord) -> f32 {
        let outcome = self.score_checked(record);
        if let Some(error) = &outcome.error {
            warn!(article_id, error = %error, "scoring failed; using fallback score");
        }
        outcome.score
    }

    /// Scores a batch in one model call. Row `i` of the result scores
    /// `records[i]`, identically to scoring it alone.
    pub fn score_batch(&self, records: &[FeatureRecord]) -> Result<Vec<f32>, ScoringError> {
        let features = self.encoder.encode_batch(records)?;
        let scores = self.model.predict(&features)?;
        scores.iter().copied().map(ensure_finite).collect()
    }
}

fn ensure_finite(value: f32) -> Result<f32, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFiniteScore { value })
    }
}
