use serde::Serialize;

use crate::catalog::Article;

/// An article plus the relevance score it earned for one request.
///
/// Serializes flat: the article fields and `relevance_score` side by side, the
/// shape the articles endpoint returns. The score is always present, rounded
/// to two decimals, and is the fallback value when scoring failed for this
/// article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    pub relevance_score: f32,
}

/// Ranked articles for one request, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    pub articles: Vec<ScoredArticle>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Article ids in ranked order.
    pub fn ids(&self) -> Vec<i64> {
        self.articles.iter().map(|s| s.article.id).collect()
    }
}

/// Rounds a score to two decimal places, the wire precision.
pub fn round_score(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}
