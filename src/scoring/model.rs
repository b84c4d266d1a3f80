use std::path::Path;
use std::sync::Arc;

use ndarray::{Array1, Array2};
use tracing::info;
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::internal::DimLike;

use crate::constants::BOOLEAN_FEATURE_COUNT;

use super::error::ScoringError;

/// Compiled tract execution plan for the relevance model.
pub type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// How scores are produced: a real ONNX plan or the deterministic stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelMode {
    Onnx,
    Stub,
}

impl ModelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelMode::Onnx => "onnx",
            ModelMode::Stub => "stub",
        }
    }
}

/// Relevance regressor: an N×F feature matrix in, one f32 score per row out.
///
/// Loaded once at startup and shared behind an `Arc` for the lifetime of the
/// process. The stub variant carries no plan and computes a fixed affine
/// formula over the feature row, which keeps tests and local runs hermetic.
pub struct RelevanceModel {
    plan: Option<Arc<OnnxPlan>>,
    mode: ModelMode,
    feature_len: usize,
}

impl std::fmt::Debug for RelevanceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceModel")
            .field("mode", &self.mode)
            .field("feature_len", &self.feature_len)
            .field("plan", &self.plan.as_ref().map(|_| "SimplePlan"))
            .finish()
    }
}

impl RelevanceModel {
    /// Loads and optimizes the ONNX artifact at `path`.
    ///
    /// The batch dimension stays symbolic; when the artifact declares a
    /// concrete input width it must equal `feature_len`.
    pub fn load<P: AsRef<Path>>(path: P, feature_len: usize) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScoringError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }

        let typed = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| ScoringError::ModelLoadFailed {
                reason: e.to_string(),
            })?
            .into_optimized()
            .map_err(|e| ScoringError::ModelLoadFailed {
                reason: e.to_string(),
            })?;

        if let Some(width) = declared_input_width(&typed) {
            if width != feature_len {
                return Err(ScoringError::ShapeMismatch {
                    expected: feature_len,
                    actual: width,
                });
            }
        }

        let plan = typed
            .into_runnable()
            .map_err(|e| ScoringError::ModelLoadFailed {
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), feature_len, "relevance model loaded");

        Ok(Self {
            plan: Some(Arc::new(plan)),
            mode: ModelMode::Onnx,
            feature_len,
        })
    }

    /// Deterministic in-process model for tests and stub deployments.
    pub fn stub(feature_len: usize) -> Self {
        Self {
            plan: None,
            mode: ModelMode::Stub,
            feature_len,
        }
    }

    pub fn mode(&self) -> ModelMode {
        self.mode
    }

    pub fn is_stub(&self) -> bool {
        self.mode == ModelMode::Stub
    }

    pub fn feature_len(&self) -> usize {
        self.feature_len
    }

    /// Scores each row of `features`. Returns exactly one score per row;
    /// a single-row matrix produces the same score the row would get inside
    /// a larger batch.
    pub fn predict(&self, features: &Array2<f32>) -> Result<Array1<f32>, ScoringError> {
        if features.ncols() != self.feature_len {
            return Err(ScoringError::ShapeMismatch {
                expected: self.feature_len,
                actual: features.ncols(),
            });
        }
        if features.nrows() == 0 {
            return Ok(Array1::zeros(0));
        }

        match &self.plan {
            Some(plan) => self.run_plan(plan, features),
            None => Ok(self.stub_scores(features)),
        }
    }

    fn run_plan(&self, plan: &OnnxPlan, features: &Array2<f32>) -> Result<Array1<f32>, ScoringError> {
        let input = tract_onnx::prelude::tract_ndarray::Array2::from_shape_fn(
            (features.nrows(), features.ncols()),
            |(i, j)| features[[i, j]],
        );
        let tensor: Tensor = input.into();

        let outputs = plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ScoringError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let view = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ScoringError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let scores = Array1::from_iter(view.iter().cloned());
        if scores.len() != features.nrows() {
            return Err(ScoringError::InferenceFailed {
                reason: format!(
                    "model returned {} scores for {} rows",
                    scores.len(),
                    features.nrows()
                ),
            });
        }

        Ok(scores)
    }

    /// Fixed affine formula over the feature row. Indicator columns contribute
    /// a position-dependent weight, the sensitivity booleans a flat bonus, so
    /// distinct rows generally score distinctly.
    fn stub_scores(&self, features: &Array2<f32>) -> Array1<f32> {
        let categorical = self.feature_len.saturating_sub(BOOLEAN_FEATURE_COUNT);

        Array1::from_iter(features.rows().into_iter().map(|row| {
            let mut score = 55.0_f32;
            for (j, value) in row.iter().take(categorical).enumerate() {
                score += value * (2.0 + j as f32 * 1.3);
            }
            if categorical < row.len() && row[categorical] > 0.5 {
                score += 12.0;
            }
            if categorical + 1 < row.len() && row[categorical + 1] > 0.5 {
                score += 9.0;
            }
            score
        }))
    }
}

/// Width the artifact declares for its single input, when concrete.
fn declared_input_width(model: &TypedModel) -> Option<usize> {
    let fact = model.input_fact(0).ok()?;
    fact.shape
        .to_tvec()
        .get(1)
        .and_then(|dim| dim.to_usize().ok())
}
