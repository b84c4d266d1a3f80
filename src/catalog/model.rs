use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pregnancy trimester an article targets.
///
/// Catalog-owned values are a closed set and validated when the catalog is loaded;
/// request-side trimester values stay raw strings so unseen values can flow through
/// filtering and the encoder's unknown-category path without erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trimester {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Trimester {
    /// The wire form ("1"/"2"/"3") used in query parameters and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trimester::First => "1",
            Trimester::Second => "2",
            Trimester::Third => "3",
        }
    }

}

impl std::fmt::Display for Trimester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An informational article from the catalog.
///
/// Immutable during a ranking request. `heat_sensitive` / `pollution_sensitive` mark
/// articles whose content is tied to those environmental conditions; the scoring
/// model consumes them as passthrough features and the concern filter matches
/// against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub full_text: String,
    pub source_name: String,
    pub source_url: String,
    pub trimester: Trimester,
    pub age_group: String,
    #[serde(default)]
    pub heat_sensitive: bool,
    #[serde(default)]
    pub pollution_sensitive: bool,
    pub created_at: DateTime<Utc>,
}
