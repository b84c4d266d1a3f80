use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BOOLEAN_FEATURE_COUNT, BUILTIN_AGE_GROUPS, BUILTIN_CONCERNS, BUILTIN_TRIMESTERS,
};
use crate::features::FeatureRecord;

use super::error::ScoringError;

/// Ordered category lists for the one-hot columns, as persisted in the
/// `encoder.json` sidecar. Order must match what the model was trained with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderVocabulary {
    pub age_group: Vec<String>,
    pub trimester: Vec<String>,
    pub concern: Vec<String>,
}

impl EncoderVocabulary {
    /// The compiled-in vocabulary used by the stub scorer.
    pub fn builtin() -> Self {
        Self {
            age_group: BUILTIN_AGE_GROUPS.iter().map(|s| s.to_string()).collect(),
            trimester: BUILTIN_TRIMESTERS.iter().map(|s| s.to_string()).collect(),
            concern: BUILTIN_CONCERNS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Loads the vocabulary sidecar from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ScoringError::EncoderRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ScoringError::EncoderParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that every column has at least one category and no duplicates.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, categories) in [
            ("age_group", &self.age_group),
            ("trimester", &self.trimester),
            ("concern", &self.concern),
        ] {
            if categories.is_empty() {
                return Err(ScoringError::InvalidEncoder {
                    reason: format!("column '{name}' has no categories"),
                });
            }

            let mut seen = std::collections::HashSet::new();
            for category in categories {
                if !seen.insert(category.as_str()) {
                    return Err(ScoringError::InvalidEncoder {
                        reason: format!("column '{name}' repeats category '{category}'"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Total feature width: one indicator per category plus the boolean columns.
    pub fn feature_len(&self) -> usize {
        self.age_group.len() + self.trimester.len() + self.concern.len() + BOOLEAN_FEATURE_COUNT
    }
}

/// One-hot encoder over a fixed vocabulary.
///
/// Unknown category values encode as an all-zero block for their column rather
/// than erroring; the booleans pass through as 1.0/0.0. Column order is
/// age_group, trimester, concern, then the two sensitivity booleans.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    vocabulary: EncoderVocabulary,
    feature_len: usize,
}

impl OneHotEncoder {
    pub fn new(vocabulary: EncoderVocabulary) -> Self {
        let feature_len = vocabulary.feature_len();
        Self {
            vocabulary,
            feature_len,
        }
    }

    /// Encoder over the compiled-in stub vocabulary.
    pub fn builtin() -> Self {
        Self::new(EncoderVocabulary::builtin())
    }

    pub fn vocabulary(&self) -> &EncoderVocabulary {
        &self.vocabulary
    }

    pub fn feature_len(&self) -> usize {
        self.feature_len
    }

    /// Encodes one record into a dense feature row of length
    /// [`feature_len`](Self::feature_len). Never fails: unknown categories zero
    /// their block.
    pub fn encode(&self, record: &FeatureRecord) -> Vec<f32> {
        let mut features = Vec::with_capacity(self.feature_len);

        Self::push_one_hot(&self.vocabulary.age_group, &record.age_group, &mut features);
        Self::push_one_hot(&self.vocabulary.trimester, &record.trimester, &mut features);
        Self::push_one_hot(&self.vocabulary.concern, &record.concern, &mut features);

        features.push(if record.heat_sensitive { 1.0 } else { 0.0 });
        features.push(if record.pollution_sensitive { 1.0 } else { 0.0 });

        features
    }

    /// Encodes a batch into an N×F matrix, one row per record.
    pub fn encode_batch(&self, records: &[FeatureRecord]) -> Result<Array2<f32>, ScoringError> {
        let rows = records.len();
        let flat: Vec<f32> = records.iter().flat_map(|r| self.encode(r)).collect();

        Array2::from_shape_vec((rows, self.feature_len), flat).map_err(|e| {
            ScoringError::InferenceFailed {
                reason: format!("failed to shape feature batch: {e}"),
            }
        })
    }

    fn push_one_hot(categories: &[String], value: &str, out: &mut Vec<f32>) {
        let hit = categories.iter().position(|c| c == value);
        for idx in 0..categories.len() {
            out.push(if Some(idx) == hit { 1.0 } else { 0.0 });
        }
    }
}
