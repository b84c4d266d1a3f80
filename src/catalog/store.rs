use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::error::CatalogError;
use super::model::Article;

/// Exact-equality constraints over the filterable article fields.
///
/// `None` means "no constraint" for that field. Trimester is matched on its wire
/// form so an unrecognized request value constrains to the empty set instead of
/// failing to parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    pub trimester: Option<String>,
    pub age_group: Option<String>,
    pub heat_sensitive: Option<bool>,
    pub pollution_sensitive: Option<bool>,
}

impl ArticleQuery {
    /// Returns `true` if the article satisfies every active constraint.
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(ref trimester) = self.trimester {
            if article.trimester.as_str() != trimester {
                return false;
            }
        }

        if let Some(ref age_group) = self.age_group {
            if article.age_group != *age_group {
                return false;
            }
        }

        if let Some(heat) = self.heat_sensitive {
            if article.heat_sensitive != heat {
                return false;
            }
        }

        if let Some(pollution) = self.pollution_sensitive {
            if article.pollution_sensitive != pollution {
                return false;
            }
        }

        true
    }

    /// Returns `true` if no constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only source of candidate articles.
///
/// Implementations must preserve a stable iteration order across calls: the ranker
/// breaks score ties by the order candidates were supplied in.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Lists every article in catalog order.
    async fn all(&self) -> Result<Vec<Article>, CatalogError>;

    /// Lists articles satisfying the query, in catalog order.
    async fn filter(&self, query: &ArticleQuery) -> Result<Vec<Article>, CatalogError>;

    /// Number of articles in the catalog.
    async fn count(&self) -> usize;
}

/// JSON seed catalog compiled into the binary, served when no
/// `NESTRANK_ARTICLES_PATH` is configured.
const SEED_ARTICLES: &str = include_str!("seed_articles.json");

/// In-memory article catalog.
///
/// The backing list is fixed at construction; ranking requests never mutate it, so
/// it is shared across handlers without locking.
#[derive(Debug, Clone)]
pub struct InMemoryArticleStore {
    articles: Vec<Article>,
}

impl InMemoryArticleStore {
    /// Creates a store over the given articles, rejecting duplicate ids.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for article in &articles {
            if !seen.insert(article.id) {
                return Err(CatalogError::InvalidData {
                    reason: format!("duplicate article id {}", article.id),
                });
            }
        }
        Ok(Self { articles })
    }

    /// Loads a JSON array of articles from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let articles: Vec<Article> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::FileParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(articles = articles.len(), path = %path.display(), "Loaded article catalog");
        Self::new(articles)
    }

    /// Builds the compiled-in seed catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        let articles: Vec<Article> =
            serde_json::from_str(SEED_ARTICLES).map_err(|source| CatalogError::InvalidData {
                reason: format!("seed catalog is not valid JSON: {source}"),
            })?;
        Self::new(articles)
    }

    /// Number of articles (non-async convenience for startup logging).
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Returns `true` if the catalog holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn all(&self) -> Result<Vec<Article>, CatalogError> {
        Ok(self.articles.clone())
    }

    async fn filter(&self, query: &ArticleQuery) -> Result<Vec<Article>, CatalogError> {
        Ok(self
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect())
    }

    async fn count(&self) -> usize {
        self.articles.len()
    }
}

/// Store whose operations always fail, for exercising gateway error paths.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct FailingArticleStore;

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl ArticleStore for FailingArticleStore {
    async fn all(&self) -> Result<Vec<Article>, CatalogError> {
        Err(CatalogError::InvalidData {
            reason: "mock store failure".to_string(),
        })
    }

    async fn filter(&self, _query: &ArticleQuery) -> Result<Vec<Article>, CatalogError> {
        Err(CatalogError::InvalidData {
            reason: "mock store failure".to_string(),
        })
    }

    async fn count(&self) -> usize {
        0
    }
}
