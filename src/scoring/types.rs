use crate::constants::FALLBACK_SCORE;

/// Outcome of scoring a single record.
///
/// Carries the failure detail alongside the score so callers can log it; the
/// ranking boundary collapses this to the bare score, substituting
/// [`FALLBACK_SCORE`] when `ok` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub score: f32,
    pub ok: bool,
    pub error: Option<String>,
}

impl ScoreOutcome {
    pub fn success(score: f32) -> Self {
        Self {
            score,
            ok: true,
            error: None,
        }
    }

    pub fn fallback(error: impl Into<String>) -> Self {
        Self {
            score: FALLBACK_SCORE,
            ok: false,
            error: Some(error.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        !self.ok
    }
}
