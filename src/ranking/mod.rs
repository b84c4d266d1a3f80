//! Candidate filtering, scoring and ordering.
//!
//! [`ArticleRanker::rank`] is the whole read path in one call: map the profile
//! onto a catalog query, score the surviving candidates through the shared
//! scorer, and return them highest-score-first with a stable tie order.

pub mod filter;
pub mod ranker;
pub mod types;


pub use filter::{candidate_query, is_heat_concern, is_pollution_concern};
pub use ranker::ArticleRanker;
pub use types::{RankedResult, ScoredArticle, round_score};
