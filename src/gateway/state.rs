use std::sync::Arc;

use crate::catalog::{ArticleStore, CatalogError, InMemoryArticleStore, StoryCatalog};
use crate::ranking::ArticleRanker;

/// Shared per-request state: the article source, the ranker and the story
/// catalog, all read-only after startup.
pub struct HandlerState<S: ArticleStore + 'static> {
    pub store: Arc<S>,
    pub ranker: Arc<ArticleRanker>,
    pub stories: Arc<StoryCatalog>,
}

impl<S: ArticleStore + 'static> Clone for HandlerState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ranker: Arc::clone(&self.ranker),
            stories: Arc::clone(&self.stories),
        }
    }
}

impl<S: ArticleStore + 'static> HandlerState<S> {
    pub fn new(store: Arc<S>, ranker: Arc<ArticleRanker>, stories: Arc<StoryCatalog>) -> Self {
        Self {
            store,
            ranker,
            stories,
        }
    }
}

impl HandlerState<InMemoryArticleStore> {
    /// State over the seed catalogs and the stub scorer.
    pub fn stub() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(InMemoryArticleStore::seeded()?),
            Arc::new(ArticleRanker::stub()),
            Arc::new(StoryCatalog::seeded()?),
        ))
    }
}
