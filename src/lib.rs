//! Nestrank library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`Article`], [`Trimester`], [`InMemoryArticleStore`] - Article catalog
//! - [`StoryCatalog`], [`StoryData`] - Interactive story catalog
//!
//! ## Scoring & Ranking
//! - [`UserProfile`], [`FeatureBuilder`], [`FeatureRecord`] - Feature construction
//! - [`RelevanceScorer`], [`ScorerConfig`], [`RelevanceModel`] - Model inference
//! - [`ArticleRanker`], [`RankedResult`], [`ScoredArticle`] - Ranking pipeline
//!
//! ## Gateway
//! - [`HandlerState`], [`create_router_with_state`] - Axum wiring
//! - [`GatewayError`] - HTTP error mapping
//!
//! ## Constants
//! Vocabulary lists, concern keyword sets and service defaults are exported for
//! consistency across modules; feature widths derive from the vocabulary lists.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod features;
pub mod gateway;
pub mod ranking;
pub mod scoring;

pub use catalog::{
    Article, ArticleQuery, ArticleStore, CatalogError, InMemoryArticleStore, Trimester,
};
pub use catalog::{
    CharacterProfile, Scene, SceneData, SceneOption, StoryCatalog, StoryCharacter, StoryData,
};
#[cfg(any(test, feature = "mock"))]
pub use catalog::FailingArticleStore;

pub use config::{Config, ConfigError};
pub use constants::{
    BUILTIN_AGE_GROUPS, BUILTIN_CONCERNS, BUILTIN_FEATURE_LEN, BUILTIN_TRIMESTERS,
    DEFAULT_MAX_CANDIDATES, DEFAULT_PORT, ENCODER_FILE_NAME, FALLBACK_SCORE, HEAT_CONCERNS,
    POLLUTION_CONCERNS, STATUS_ERROR, STATUS_HEADER, STATUS_HEALTHY, STATUS_READY,
};
pub use features::{FeatureBuilder, FeatureRecord, UserProfile};
pub use gateway::{
    ArticleQueryParams, GatewayError, HandlerState, StoryQueryParams, create_router_with_state,
};
pub use ranking::{
    ArticleRanker, RankedResult, ScoredArticle, candidate_query, is_heat_concern,
    is_pollution_concern, round_score,
};
pub use scoring::{
    EncoderVocabulary, ModelMode, OneHotEncoder, RelevanceModel, RelevanceScorer, ScoreOutcome,
    ScorerConfig, ScoringError,
};
