use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Article;
use crate::constants::DEFAULT_MAX_CANDIDATES;
use crate::features::{FeatureBuilder, UserProfile};
use crate::scoring::{ModelMode, RelevanceScorer};

use super::filter::candidate_query;
use super::types::{RankedResult, ScoredArticle, round_score};

/// Filters, scores and orders candidate articles for one profile.
///
/// Holds the process-wide scorer behind an `Arc`; `rank` takes `&self` and
/// touches no shared mutable state, so one ranker serves concurrent requests.
#[derive(Debug, Clone)]
pub struct ArticleRanker {
    scorer: Arc<RelevanceScorer>,
    max_candidates: usize,
}

impl ArticleRanker {
    /// `max_candidates` bounds how many filtered candidates get scored per
    /// request; the configuration layer guarantees it is positive.
    pub fn new(scorer: Arc<RelevanceScorer>, max_candidates: usize) -> Self {
        Self {
            scorer,
            max_candidates,
        }
    }

    /// Ranker over the deterministic stub scorer.
    pub fn stub() -> Self {
        Self::new(Arc::new(RelevanceScorer::stub()), DEFAULT_MAX_CANDIDATES)
    }

    pub fn mode(&self) -> ModelMode {
        self.scorer.mode()
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Produces the ranked articles for `profile` out of `candidates`.
    ///
    /// Pipeline: drop candidates the profile filters out, cap the survivors at
    /// the candidate bound, score each survivor (failures fall back to the
    /// fallback score and stay listed), then sort by rounded score descending.
    /// Ties keep the candidates' original relative order.
    pub fn rank(&self, profile: &UserProfile, candidates: &[Article]) -> RankedResult {
        let query = candidate_query(profile);

        let mut survivors: Vec<(usize, &Article)> = candidates
            .iter()
            .enumerate()
            .filter(|(_, article)| query.matches(article))
            .collect();

        if survivors.len() > self.max_candidates {
            warn!(
                survivors = survivors.len(),
                bound = self.max_candidates,
                "truncating ranking candidates"
            );
            survivors.truncate(self.max_candidates);
        }

        debug!(
            candidates = candidates.len(),
            survivors = survivors.len(),
            "ranking candidates"
        );

        let mut scored: Vec<(usize, ScoredArticle)> = survivors
            .into_iter()
            .map(|(index, article)| {
                let record = FeatureBuilder::build(profile, article);
                let score = self.scorer.score_safe(article.id, &record);
                let entry = ScoredArticle {
                    article: article.clone(),
                    relevance_score: round_score(score),
                };
                (index, entry)
            })
            .collect();

        scored.sort_by(|(ia, a), (ib, b)| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| ia.cmp(ib))
        });

        RankedResult {
            articles: scored.into_iter().map(|(_, entry)| entry).collect(),
        }
    }
}
