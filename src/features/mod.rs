//! Feature construction for the relevance model.
//!
//! [`FeatureBuilder::build`] maps a (profile, article) pair into the fixed-shape
//! [`FeatureRecord`] the model was trained on: the categorical fields come from the
//! profile (the question is "how relevant is this sensitivity profile to this
//! user"), the sensitivity booleans come from the article. No validation happens
//! here; unseen category values are the encoder's concern.


use serde::Serialize;

use crate::catalog::Article;

/// Per-request user profile assembled from query parameters.
///
/// Fields hold the raw request strings: an empty field means "no constraint" and an
/// unrecognized value is carried verbatim so it can participate in filtering and in
/// the encoder's unknown-category path. The concern is case-normalized to lowercase
/// at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub age_group: String,
    pub trimester: String,
    pub concern: String,
}

impl UserProfile {
    /// Builds a profile from raw query-parameter values, lowercasing the concern.
    pub fn new(
        age_group: impl Into<String>,
        trimester: impl Into<String>,
        concern: impl Into<String>,
    ) -> Self {
        Self {
            age_group: age_group.into(),
            trimester: trimester.into(),
            concern: concern.into().to_lowercase(),
        }
    }
}

/// The fixed-shape input consumed by the scoring model.
///
/// Three categorical strings and two booleans, built fresh per (profile, article)
/// pair and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    pub age_group: String,
    pub trimester: String,
    pub concern: String,
    pub heat_sensitive: bool,
    pub pollution_sensitive: bool,
}

/// Stateless constructor of [`FeatureRecord`]s.
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Builds the feature record for one (profile, article) pair.
    ///
    /// Pure function of its inputs: age_group, trimester and concern are taken from
    /// the profile, the sensitivity flags from the article.
    pub fn build(profile: &UserProfile, article: &Article) -> FeatureRecord {
        FeatureRecord {
            age_group: profile.age_group.clone(),
            trimester: profile.trimester.clone(),
            concern: profile.concern.clone(),
            heat_sensitive: article.heat_sensitive,
            pollution_sensitive: article.pollution_sensitive,
        }
    }
}
