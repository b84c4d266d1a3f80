//! Article and story catalogs (data model, stores, seeds).

pub mod error;
pub mod model;
pub mod store;
pub mod story;


pub use error::CatalogError;
pub use model::{Article, Trimester};
pub use store::{ArticleQuery, ArticleStore, InMemoryArticleStore};
pub use story::{
    CharacterProfile, Scene, SceneData, SceneOption, StoryCatalog, StoryCharacter, StoryData,
};

#[cfg(any(test, feature = "mock"))]
pub use store::FailingArticleStore;
