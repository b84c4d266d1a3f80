use crate::catalog::ArticleQuery;
use crate::constants::{HEAT_CONCERNS, POLLUTION_CONCERNS};
use crate::features::UserProfile;

/// True when the concern names the heat family ("heat", "heatwave").
pub fn is_heat_concern(concern: &str) -> bool {
    HEAT_CONCERNS.iter().any(|c| concern.eq_ignore_ascii_case(c))
}

/// True when the concern names the pollution family ("pollution", "air_pollution").
pub fn is_pollution_concern(concern: &str) -> bool {
    POLLUTION_CONCERNS
        .iter()
        .any(|c| concern.eq_ignore_ascii_case(c))
}

/// Maps a profile onto the catalog query used to pre-filter candidates.
///
/// Every field is optional: an empty profile field adds no constraint.
/// Trimester and age group filter by exact value. A concern only filters when
/// it names one of the sensitivity families; any other concern leaves the
/// candidate set alone and influences scoring only.
pub fn candidate_query(profile: &UserProfile) -> ArticleQuery {
    let mut query = ArticleQuery::default();

    if !profile.trimester.is_empty() {
        query.trimester = Some(profile.trimester.clone());
    }
    if !profile.age_group.is_empty() {
        query.age_group = Some(profile.age_group.clone());
    }
    if !profile.concern.is_empty() {
        if is_heat_concern(&profile.concern) {
            query.heat_sensitive = Some(true);
        } else if is_pollution_concern(&profile.concern) {
            query.pollution_sensitive = Some(true);
        }
    }

    query
}
